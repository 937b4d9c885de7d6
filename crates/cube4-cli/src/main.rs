mod command;
mod input;
mod logging;
mod tui;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
