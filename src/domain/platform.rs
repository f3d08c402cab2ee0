use std::fmt;

/// Category partitioning the input test cases and generated features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Common,
    Azure,
    Aws,
}

impl Platform {
    /// Processing order used by the generator.
    pub const ALL: [Platform; 3] = [Platform::Common, Platform::Azure, Platform::Aws];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Common => "common",
            Platform::Azure => "azure",
            Platform::Aws => "aws",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
