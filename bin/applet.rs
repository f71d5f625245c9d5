use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod moves;
mod perft;

#[derive(Debug, From, Subcommand)]
pub enum Applet {
    Moves(moves::Moves),
    Perft(perft::Perft),
}

impl Default for Applet {
    fn default() -> Self {
        perft::Perft::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Moves(a) => Ok(a.execute()?),
            Applet::Perft(a) => Ok(a.execute()?),
        }
    }
}
