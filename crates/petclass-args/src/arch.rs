//! CNN model architectures the classifier can run.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use petclass_common::InvalidArgument;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    #[default]
    Vgg,
    Alexnet,
    Resnet,
}

impl Arch {
    pub const ALL: [Arch; 3] = [Arch::Vgg, Arch::Alexnet, Arch::Resnet];

    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Vgg => "vgg",
            Arch::Alexnet => "alexnet",
            Arch::Resnet => "resnet",
        }
    }

    /// Textual names in declaration order.
    pub fn names() -> [&'static str; 3] {
        Self::ALL.map(Arch::as_str)
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive, like the command line.
impl FromStr for Arch {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|arch| arch.as_str() == s)
            .ok_or_else(|| InvalidArgument::invalid_choice(s, &Self::names()))
    }
}
