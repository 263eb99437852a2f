mod boot;
mod cli;
mod repl;

use fellah_common::FellahError;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), FellahError> {
    // Load .env file before anything reads the environment
    boot::load_dotenv();

    let args = cli::parse();
    let log_handle = boot::init_logging(&args);
    let config = boot::load_config(&args)?;
    boot::apply_config_log_level(&log_handle, &args, &config);

    let client = boot::build_client(&config)?;
    let manager = boot::build_manager(&config, &args);
    let extra_context = args
        .context_file
        .as_deref()
        .and_then(boot::read_context_file);

    info!(
        language = %manager.language(),
        max_context_tokens = manager.max_context_tokens(),
        "🌾 مساعد الفلاحة المغربية ready"
    );
    println!("🌾 مساعد الفلاحة المغربية — مساعدك الذكي في عالم الفلاحة");
    println!("Type a question, /clear to reset, /quit to exit.\n");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut repl = repl::Repl::new(&manager, &client).with_extra_context(extra_context);
    repl.run(stdin.lock(), stdout.lock()).await?;

    info!(messages = repl.history().len(), "session ended");
    Ok(())
}
