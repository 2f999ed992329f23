use log::{LevelFilter, info};
use log4rs::Config;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Logger, Root};
use todo_console::TaskRepository;
use todo_console::shell::{Shell, StdConsole};

fn main() -> anyhow::Result<()> {
    init_logging();

    info!("Starting todo console");
    let mut repository = TaskRepository::new();
    let mut console = StdConsole;
    Shell::new(&mut repository, &mut console).run()?;
    info!("Session ended");
    Ok(())
}

fn init_logging() {
    let stdout = ConsoleAppender::builder().build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .logger(Logger::builder().build("todo_console", LevelFilter::Info))
        .build(Root::builder().appender("stdout").build(LevelFilter::Warn))
        .expect("logging config is well formed");
    let _log4rs_handle = log4rs::init_config(config).expect("logging initializes once");
}
