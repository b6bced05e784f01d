use std::path::PathBuf;

/// A finished check, handed from a worker to the result sink.
///
/// Each worker builds its own buffers; ownership moves to the coordinator
/// through the results channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutput {
    /// Signature file the check came from.
    pub signature: PathBuf,
    /// `id` field of that signature.
    pub signature_id: String,
    /// Position of the check within its signature.
    pub check_index: usize,
    /// Declared outfile, if any.
    pub outfile: Option<PathBuf>,
    /// Number of searches that contributed to `content`.
    pub searches: usize,
    /// Concatenated search output followed by the notes block.
    pub content: String,
}
