use folio_types::constants::DEFAULT_VERSION;

/// How the finished document reaches the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmissionMode {
    /// Assemble the whole document in memory and hand it to the sink in one write.
    /// A failure before that write leaves the sink untouched. (Default)
    #[default]
    Buffered,
    /// Write header, each object, the xref table and the trailer as separate
    /// appends. Uses less peak memory; a sink error leaves truncated output.
    Streaming,
}

/// Source of the two timestamps embedded in the trailer's `/ID` array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailerTimestamp {
    /// Milliseconds since the Unix epoch at finalize time.
    #[default]
    Now,
    /// A fixed value, for reproducible output.
    Fixed(i64),
}

impl TrailerTimestamp {
    pub fn value(self) -> i64 {
        match self {
            TrailerTimestamp::Now => chrono::Utc::now().timestamp_millis(),
            TrailerTimestamp::Fixed(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Version written in the `%PDF-x.y` header line.
    ///
    /// Defaults to `"1.4"`.
    pub version: String,
    /// Alias of the object the trailer names as `/Root`.
    ///
    /// Defaults to `"CATALOG"`.
    pub root_alias: String,
    pub timestamp: TrailerTimestamp,
    pub emission: EmissionMode,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            root_alias: "CATALOG".to_string(),
            timestamp: TrailerTimestamp::Now,
            emission: EmissionMode::Buffered,
        }
    }
}

impl WriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_root_alias(mut self, alias: impl Into<String>) -> Self {
        self.root_alias = alias.into();
        self
    }

    /// Pins both trailer timestamps so identical input gives identical bytes.
    pub fn with_fixed_timestamp(mut self, millis: i64) -> Self {
        self.timestamp = TrailerTimestamp::Fixed(millis);
        self
    }

    pub fn with_emission(mut self, emission: EmissionMode) -> Self {
        self.emission = emission;
        self
    }
}
