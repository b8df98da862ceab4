use super::OutputLayout;

/// When generated files reach the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Write after every tool succeeded; an aborted run writes nothing.
    #[default]
    Staged,
    /// Write each tool's units as soon as the tool completes; units of tools
    /// that ran before a failure stay on disk.
    Immediate,
}

/// Immutable settings of one orchestrator, built once by the caller.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    layout: OutputLayout,
    write_policy: WritePolicy,
}

impl RunConfig {
    pub fn new(layout: OutputLayout) -> Self {
        Self {
            layout,
            write_policy: WritePolicy::default(),
        }
    }

    pub fn with_write_policy(mut self, write_policy: WritePolicy) -> Self {
        self.write_policy = write_policy;
        self
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    pub fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }
}
