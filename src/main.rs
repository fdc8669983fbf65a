use mergington::{config::get_or_init_config, App, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // We have a different logging mechanism for production
    #[cfg(not(debug_assertions))]
    {
        mergington::init_production_tracing()
    }
    #[cfg(debug_assertions)]
    {
        mergington::init_dbg_tracing();
    }

    let config = get_or_init_config();
    let app = App::build_from_config(config.clone()).await?;

    mergington::serve(app).await?;

    Ok(())
}
