mod sendgrid;
mod supertool;
mod telegram;
