use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use euchre::RoundSummary;
use serde::Serialize;

/// Buffers the round summaries of the game in progress and writes one
/// numbered JSON file per finished game.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    rounds: Vec<RoundSummary>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            rounds: Vec::new(),
        })
    }

    pub fn store_round(&mut self, summary: &RoundSummary) {
        self.rounds.push(*summary);
    }

    pub fn write_game_recording(&mut self, final_score: [u32; 2]) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        let recording = GameRecording {
            final_score,
            rounds: std::mem::take(&mut self.rounds),
        };
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(())
    }
}

#[derive(Serialize)]
struct GameRecording {
    final_score: [u32; 2],
    rounds: Vec<RoundSummary>,
}
