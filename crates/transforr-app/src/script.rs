//! Scripted input for headless runs.
//!
//! A script is a list of steps, each holding one input frame for a number of
//! ticks. The script loops once it runs out.

use serde::{Deserialize, Serialize};

use transforr_core::commands::InputFrame;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptStep {
    /// How many ticks this step lasts. Zero-length steps are skipped.
    pub ticks: u32,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub fire: bool,
    pub transform: bool,
}

impl ScriptStep {
    fn input(&self) -> InputFrame {
        InputFrame {
            left: self.left,
            right: self.right,
            jump: self.jump,
            fire: self.fire,
            transform: self.transform,
            pause: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
}

impl Default for InputScript {
    /// Run right with the trigger held, hopping now and then.
    fn default() -> Self {
        let run = ScriptStep {
            ticks: 40,
            right: true,
            fire: true,
            ..Default::default()
        };
        let hop = ScriptStep {
            ticks: 1,
            jump: true,
            ..run.clone()
        };
        Self::new(vec![run.clone(), hop.clone(), ScriptStep { ticks: 25, ..run }, hop])
    }
}

impl InputScript {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    /// Length of one pass through the script.
    pub fn period(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.ticks)).sum()
    }

    /// Input for the given tick. An empty script is idle forever.
    pub fn input_at(&self, tick: u64) -> InputFrame {
        let period = self.period();
        if period == 0 {
            return InputFrame::IDLE;
        }

        let mut offset = tick % period;
        for step in &self.steps {
            let len = u64::from(step.ticks);
            if offset < len {
                return step.input();
            }
            offset -= len;
        }
        InputFrame::IDLE
    }
}
