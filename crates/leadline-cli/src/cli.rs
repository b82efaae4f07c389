//! Command-line arguments.
//!
//! Every setting can come from a flag or from the environment variable of
//! the same name. Blank values are treated as unset.

use std::net::SocketAddr;

use clap::{Args as ClapArgs, Parser, Subcommand};
use leadline_core::config::non_blank;
use leadline_core::{Config, NotifyBackend};

/// Default listen address.
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Leadline - contact-form and click-tracking relay
#[derive(Parser, Debug)]
#[command(name = "leadline", author, version, about, long_about = None)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, env = "LEADLINE_BIND", default_value = DEFAULT_BIND)]
        bind: SocketAddr,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Print the resolved configuration as environment variables
    Config {
        /// Format as `--env KEY=VALUE` for `docker run`
        #[arg(long)]
        docker_env: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Run the spam screen on the given fields
    Check {
        /// Submitter name
        #[arg(long)]
        name: Option<String>,

        /// Honeypot field value
        #[arg(long)]
        fax: Option<String>,

        /// Form render time, milliseconds since the Unix epoch
        #[arg(long)]
        timestamp: Option<String>,
    },
}

/// Settings for the outbound integrations and site details.
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Which notification channels to use: email, chat, or both
    #[arg(long, env = "NOTIFY_BACKEND")]
    pub notify_backend: Option<String>,

    /// SendGrid API key; enables email
    #[arg(long, env = "SENDGRID_API_KEY", hide_env_values = true)]
    pub sendgrid_api_key: Option<String>,

    /// SendGrid send endpoint
    #[arg(long, env = "SENDGRID_API_URL")]
    pub sendgrid_api_url: Option<String>,

    /// Telegram bot token; enables chat
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub telegram_bot_token: Option<String>,

    /// Telegram chat to post leads to
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    pub telegram_chat_id: Option<String>,

    /// Telegram Bot API base URL
    #[arg(long, env = "TELEGRAM_API_URL")]
    pub telegram_api_url: Option<String>,

    /// CRM base URL
    #[arg(long, env = "SUPERTOOL_API")]
    pub supertool_api: Option<String>,

    /// CRM tenant id; enables lead forwarding
    #[arg(long, env = "SUPERTOOL_TENANT_ID")]
    pub supertool_tenant_id: Option<String>,

    /// Site display name
    #[arg(long, env = "SITE_NAME")]
    pub site_name: Option<String>,

    /// Business inbox for lead notifications
    #[arg(long, env = "SITE_EMAIL")]
    pub site_email: Option<String>,

    /// Callback number quoted in emails
    #[arg(long, env = "SITE_PHONE")]
    pub site_phone: Option<String>,

    /// Footer line for outgoing emails
    #[arg(long, env = "SITE_TAGLINE")]
    pub site_tagline: Option<String>,

    /// Sender address for outgoing emails
    #[arg(long, env = "FROM_EMAIL")]
    pub from_email: Option<String>,
}

impl TryFrom<ConfigArgs> for Config {
    type Error = leadline_core::Error;

    fn try_from(args: ConfigArgs) -> leadline_core::Result<Self> {
        let mut config = Config::default();

        if let Some(backend) = non_blank(args.notify_backend) {
            config.notify = backend.parse::<NotifyBackend>()?;
        }

        config.email.api_key = non_blank(args.sendgrid_api_key);
        config.chat.bot_token = non_blank(args.telegram_bot_token);
        config.crm.tenant_id = non_blank(args.supertool_tenant_id);

        override_with(&mut config.email.api_url, args.sendgrid_api_url);
        override_with(&mut config.email.from, args.from_email);
        override_with(&mut config.chat.chat_id, args.telegram_chat_id);
        override_with(&mut config.chat.api_url, args.telegram_api_url);
        override_with(&mut config.crm.base_url, args.supertool_api);
        override_with(&mut config.site.name, args.site_name);
        override_with(&mut config.site.email, args.site_email);
        override_with(&mut config.site.phone, args.site_phone);
        override_with(&mut config.site.tagline, args.site_tagline);

        Ok(config)
    }
}

fn override_with(slot: &mut String, value: Option<String>) {
    if let Some(value) = non_blank(value) {
        *slot = value;
    }
}
