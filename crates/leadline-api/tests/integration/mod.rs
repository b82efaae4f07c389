mod cors;
mod health;
mod track;
