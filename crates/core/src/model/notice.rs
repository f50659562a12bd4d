/// One-line notification shown to the player until dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    IncorrectGuess,
    DownloadSucceeded,
    DownloadFailed,
}

impl Notice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Notice::IncorrectGuess => "Incorrect guess. Try again!",
            Notice::DownloadSucceeded => "Image downloaded successfully!",
            Notice::DownloadFailed => "Failed to download image!",
        }
    }

    #[must_use]
    pub fn is_failure(self) -> bool {
        !matches!(self, Notice::DownloadSucceeded)
    }
}
