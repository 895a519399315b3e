mod command;
mod score_file;
mod tui;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
