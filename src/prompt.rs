use crate::{BlockType, Config, Facts, Segment, Theme, render, segment};
use tracing::trace;

/// Runs the enabled blocks in order and renders what they produce
pub struct Prompt<'a> {
    config: &'a Config,
    theme: &'a Theme,
}

impl<'a> Prompt<'a> {
    pub fn new(config: &'a Config, theme: &'a Theme) -> Self {
        Self { config, theme }
    }

    /// Blocks to run, left to right. The hostname is only interesting on remote shells.
    pub fn blocks(&self, remote: bool) -> Vec<BlockType> {
        BlockType::ALL
            .into_iter()
            .filter(|&block| block != BlockType::Hostname || remote)
            .filter(|&block| self.config.enabled(block))
            .collect()
    }

    pub fn segments(&self, facts: &dyn Facts) -> Vec<Segment> {
        let mut segments = Vec::new();
        for block in self.blocks(facts.is_remote()) {
            let produced = block.create_from_env(facts, self.theme);
            trace!(?block, count = produced.len(), "block done");
            segments.extend(produced);
        }
        if self.config.sort_by_weight {
            segment::sort_by_weight(&mut segments);
        }
        segments
    }

    /// Full prompt text, title escape included when the terminal understands it
    pub fn render(&self, facts: &dyn Facts) -> String {
        let line = render(&self.segments(facts), self.theme);
        match facts.term() {
            Some(term) if term.contains("xterm") || term.contains("rxvt") => {
                self.theme.shell.title() + &line
            }
            _ => line,
        }
    }
}
