use staffdir::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config: ServerConfig = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Failed to parse configuration: {e}")))?;

    staffdir::run(server_config).await
}
