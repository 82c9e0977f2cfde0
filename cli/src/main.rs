mod commands;
mod terminal;

use commands::{CommandLine, Operation, Session, discover, ping, scan, traffic};
use netkit_common::config::Config;
use terminal::input::{InputHandle, SessionEnd};
use terminal::logging;
use terminal::print::Printer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging(commands.verbose, cfg.color);
    // Keeps `colored` from dropping escapes on its own when `--color always` is given.
    colored::control::set_override(cfg.color);

    let mut session = Session::new(cfg, InputHandle::start());
    session.printer.banner();

    let outcome = run(&mut session).await;
    finish(&session.printer, outcome)
}

/// Turns the way the session ended into the process result.
fn finish(printer: &Printer, outcome: anyhow::Result<()>) -> anyhow::Result<()> {
    match outcome {
        Ok(()) => {
            printer.success("Bye");
            Ok(())
        }
        Err(e) => match e.downcast_ref::<SessionEnd>() {
            Some(SessionEnd::Interrupted) => {
                printer.print("");
                printer.notice("Interrupted by user. Exiting.");
                Ok(())
            }
            Some(SessionEnd::Closed) => {
                printer.print("");
                printer.success("Bye");
                Ok(())
            }
            None => Err(e),
        },
    }
}

async fn run(session: &mut Session) -> anyhow::Result<()> {
    loop {
        print_menu(session);
        let raw: String = session.ask("Choice (1-5): ").await?;

        let operation: Operation = match raw.parse() {
            Ok(op) => op,
            Err(_) => {
                session.printer.failure("Invalid choice, try again.");
                continue;
            }
        };

        let result = match operation {
            Operation::Ping => ping::ping(session).await,
            Operation::Scan => scan::scan(session).await,
            Operation::Traffic => traffic::traffic(session).await,
            Operation::Discover => discover::discover(session).await,
            Operation::Exit => return Ok(()),
        };

        if let Err(e) = result {
            if e.is::<SessionEnd>() {
                return Err(e);
            }
            session.printer.failure(format!("{operation} failed: {e:#}"));
        }
    }
}

fn print_menu(session: &Session) {
    session.printer.print("");
    session.printer.header("menu");
    for op in Operation::ALL {
        session.printer.menu_item(op.key(), op.description());
    }
}
