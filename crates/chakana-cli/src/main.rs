mod command;
mod pattern;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
