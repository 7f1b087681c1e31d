use clap::{Parser, Subcommand};
use tracing::info;

use crate::api_client::FotMobClient;
use crate::cached_client::CachedClient;
use crate::config::{Config, LanguageSetting, View};
use crate::render::render;
use crate::store::FileStore;
use crate::widget;

#[derive(Parser, Debug)]
#[command(version, about = "Previous and next match plus league table for a football team")]
pub struct Cli {
    #[command(subcommand)]
    cmd: Cmd,

    /// FotMob team id
    #[arg(long, global = true)]
    team: Option<u32>,

    /// Time zone used for kickoff times, e.g. Europe/Lisbon
    #[arg(long, global = true)]
    time_zone: Option<String>,

    #[arg(long, global = true, value_enum)]
    language: Option<LanguageSetting>,

    #[arg(long, global = true, value_enum)]
    view: Option<View>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print the widget as text
    Show,
    /// Print the widget model as JSON
    Json,
    /// Print only the league table
    Table,
    ClearCache,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        let settings = &mut config.settings;
        if let Some(team) = self.team {
            settings.team_id = team;
        }
        if let Some(time_zone) = &self.time_zone {
            settings.time_zone = time_zone.clone();
        }
        if let Some(language) = self.language {
            settings.language = language;
        }
        if let Some(view) = self.view {
            settings.view = view;
        }
        if matches!(self.cmd, Cmd::Table) {
            settings.view = View::Table;
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load();
        self.apply(&mut config);

        let store = FileStore::new(&config.cache_dir);
        let cache = CachedClient::new(FotMobClient::new(&config.api_url)?, store);

        match self.cmd {
            Cmd::Show | Cmd::Table => {
                let widget = build(&cache, &config).await;
                print!("{}", render(&widget));
            }
            Cmd::Json => {
                let widget = build(&cache, &config).await;
                println!("{}", serde_json::to_string_pretty(&widget)?);
            }
            Cmd::ClearCache => {
                info!(path = %config.cache_dir.display(), "deleting cached data");
                cache.clear()?;
            }
        }

        Ok(())
    }
}

async fn build(cache: &CachedClient<FotMobClient>, config: &Config) -> widget::Widget {
    let today = chrono::Local::now().date_naive();
    widget::build(cache, config, today).await
}
