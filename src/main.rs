use anyhow::Context;
use clap::Parser;
use student_roster::utils::{logger, validation::Validate};
use student_roster::{
    CliConfig, DemoRunner, DemoScript, JsonReporter, OutputFormat, Reporter, ScriptConfig,
    TextReporter,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting student-roster");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    config.validate().context("invalid command line")?;

    let (script, strict) = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading script from: {}", path);
            let script_config = ScriptConfig::from_file(path)
                .with_context(|| format!("failed to load script '{}'", path))?;
            script_config
                .validate()
                .with_context(|| format!("invalid script '{}'", path))?;
            (script_config.to_script(), config.strict || script_config.strict())
        }
        None => (DemoScript::sample(), config.strict),
    };

    let stdout = std::io::stdout().lock();
    match config.format {
        OutputFormat::Text => {
            let mut reporter = TextReporter::new(stdout);
            reporter.banner()?;
            run(reporter, &script, strict)
        }
        OutputFormat::Json => run(JsonReporter::new(stdout), &script, strict),
    }
}

fn run<R: Reporter>(reporter: R, script: &DemoScript, strict: bool) -> anyhow::Result<()> {
    let mut runner = DemoRunner::new(reporter).strict(strict);
    runner.run(script).context("demo run failed")?;

    let (store, _) = runner.into_parts();
    tracing::info!("📊 {} student(s) remain in the roster", store.count());
    Ok(())
}
