//! Capture mode and option vocabulary.
//!
//! These types describe *what* a capture request asks for; they carry no
//! assembly logic. The option tables mirror tshark's interface-capture and
//! file-read option sets: an option belongs to exactly one mode, and its
//! shape (bare flag vs single value) is fixed by its kind.

use std::path::PathBuf;

/// Which source tshark reads packets from.
///
/// Set once per invocation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureMode {
    /// Live capture from a network interface (`-i <name>`).
    Interface(String),
    /// Read packets from one or more saved capture files (`-r <path>`).
    FileRead(Vec<PathBuf>),
}

impl CaptureMode {
    /// The primary tshark flag for this mode.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Interface(_) => "-i",
            Self::FileRead(_) => "-r",
        }
    }

    /// Human-readable mode name for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Interface(_) => "interface capture",
            Self::FileRead(_) => "file read",
        }
    }
}

/// A secondary tshark option.
///
/// `CaptureFilter`, `WriteFile`, and `PacketCount` apply to interface
/// capture; `TwoPass`, `DisplayFilter`, `FieldsOutput`, and `JsonOutput`
/// apply to file reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Pre-capture packet filter (`-f <expr>`), assembled from a
    /// [`CaptureFilterSpec`].
    CaptureFilter,
    /// Write captured packets to a file (`-w <path>`).
    WriteFile,
    /// Stop after a fixed number of packets (`-c <n>`).
    PacketCount,
    /// Two-pass analysis (`-2`).
    TwoPass,
    /// Post-capture display filter (`-Y <expr>`).
    DisplayFilter,
    /// Field-oriented output (`-T fields`).
    FieldsOutput,
    /// JSON output (`-T json`).
    JsonOutput,
}

impl OptionKind {
    /// The argument tokens this option contributes before any value.
    ///
    /// Most options are a single flag; the output formats are the two-token
    /// `-T <format>` form.
    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            Self::CaptureFilter => &["-f"],
            Self::WriteFile => &["-w"],
            Self::PacketCount => &["-c"],
            Self::TwoPass => &["-2"],
            Self::DisplayFilter => &["-Y"],
            Self::FieldsOutput => &["-T", "fields"],
            Self::JsonOutput => &["-T", "json"],
        }
    }

    /// The flag used to name this option in error messages.
    pub fn flag(&self) -> &'static str {
        self.tokens()[0]
    }

    /// Whether this option must carry exactly one value argument.
    ///
    /// `CaptureFilter` is excluded: its value is assembled from a
    /// [`CaptureFilterSpec`], not supplied in the selection.
    pub fn requires_value(&self) -> bool {
        matches!(self, Self::WriteFile | Self::PacketCount | Self::DisplayFilter)
    }

    /// Whether this option applies under the given capture mode.
    pub fn applies_to(&self, mode: &CaptureMode) -> bool {
        match self {
            Self::CaptureFilter | Self::WriteFile | Self::PacketCount => {
                matches!(mode, CaptureMode::Interface(_))
            }
            Self::TwoPass | Self::DisplayFilter | Self::FieldsOutput | Self::JsonOutput => {
                matches!(mode, CaptureMode::FileRead(_))
            }
        }
    }
}

/// One selected option together with its supplied values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedOption {
    /// Which option was selected.
    pub kind: OptionKind,
    /// Values supplied for it, in caller order.
    pub values: Vec<String>,
}

impl SelectedOption {
    /// Select an option with no value.
    pub fn bare(kind: OptionKind) -> Self {
        Self {
            kind,
            values: Vec::new(),
        }
    }

    /// Select an option with a single value.
    pub fn with_value(kind: OptionKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            values: vec![value.into()],
        }
    }
}

/// An ordered set of selected secondary options.
///
/// Insertion order is significant: the builder emits options in exactly
/// this order, and tshark option ordering can affect semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSelection {
    options: Vec<SelectedOption>,
}

impl OptionSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bare option, preserving insertion order.
    pub fn select(mut self, kind: OptionKind) -> Self {
        self.options.push(SelectedOption::bare(kind));
        self
    }

    /// Append an option with a single value, preserving insertion order.
    pub fn select_with(mut self, kind: OptionKind, value: impl Into<String>) -> Self {
        self.options.push(SelectedOption::with_value(kind, value));
        self
    }

    /// Append an already-constructed selection entry.
    pub fn push(&mut self, option: SelectedOption) {
        self.options.push(option);
    }

    /// Iterate the selected options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectedOption> {
        self.options.iter()
    }

    /// Whether no options are selected.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Number of selected options.
    pub fn len(&self) -> usize {
        self.options.len()
    }
}

/// A capture-filter keyword term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKeyword {
    Http,
    Dns,
    Tcp,
}

impl FilterKeyword {
    /// The term as it appears in the filter expression.
    pub fn term(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Dns => "dns",
            Self::Tcp => "tcp",
        }
    }
}

/// Structured input for the capture-filter option.
///
/// Keyword order is preserved into the assembled expression. The host
/// value is free text supplied by the user; it stays inside the single
/// filter argument and is never handed to a shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureFilterSpec {
    keywords: Vec<FilterKeyword>,
    host: Option<String>,
}

impl CaptureFilterSpec {
    /// Create an empty filter spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a keyword term.
    pub fn keyword(mut self, keyword: FilterKeyword) -> Self {
        self.keywords.push(keyword);
        self
    }

    /// Set the host clause value.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// The keyword terms in insertion order.
    pub fn keywords(&self) -> &[FilterKeyword] {
        &self.keywords
    }

    /// The host clause value, if any.
    pub fn host_value(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Whether the spec selects nothing at all.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.host.is_none()
    }
}
