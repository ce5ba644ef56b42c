use cardsight_bot::{
    bot::{self, command::CommandRegistry, dispatch::Dispatcher},
    config::Config,
    error::AppError,
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;

    tracing::info!(
        cardsight_base_url = %config.cardsight_base_url,
        guild_id = config.discord_guild_id,
        "Starting CardSight bot"
    );

    let state = startup::build_state(&config)?;
    let dispatcher = Dispatcher::new(CommandRegistry::new(), state);

    let client = bot::start::init_bot(&config, dispatcher).await?;
    bot::start::start_bot(client).await
}
