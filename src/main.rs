//! # Goban
//!
//! Interactive terminal Go board. Left click places stones (or toggles dead
//! groups in scoring mode); the view keeps the display in sync with the
//! bundled engine after every action.

use clap::Parser;

use goban_tui::app::App;
use goban_tui::tui;

#[derive(Parser)]
#[command(name = "goban", about = "Terminal Go board with scoring overlays")]
struct Args {
    /// Board side length (2 to 25)
    #[arg(short, long, default_value_t = 9)]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    anyhow::ensure!(
        (2..=25).contains(&args.size),
        "board size must be between 2 and 25, got {}",
        args.size
    );
    let mut app = App::new(args.size);
    tui::run(&mut app)?;
    Ok(())
}
