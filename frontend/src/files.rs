//! File selection and batch validation.
//!
//! Files reach the view either from a drop on the upload zone or from the
//! hidden file picker. [`FileSource`] hides that difference behind one
//! extraction function so the submit cycle only ever sees a `Vec<File>`.

use web_sys::{DragEvent, File, FileList, HtmlInputElement};

use crate::config::IMAGE_MIME_PREFIX;
use crate::types::{AppError, AppResult};

/// Where a batch of files came from.
pub enum FileSource {
    /// Dropped on the upload zone.
    Dropped(DragEvent),
    /// Chosen through the file picker.
    Picked(HtmlInputElement),
}

impl FileSource {
    /// Extract the selected files in selection order.
    pub fn files(&self) -> Vec<File> {
        let list = match self {
            FileSource::Dropped(ev) => ev.data_transfer().and_then(|dt| dt.files()),
            FileSource::Picked(input) => input.files(),
        };
        list.map(collect_files).unwrap_or_default()
    }
}

/// Copy a `FileList` into an owned vector.
pub fn collect_files(list: FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Minimal view of an uploaded file, enough to validate it.
pub trait ImageFile {
    fn name(&self) -> String;
    /// Declared MIME type, possibly empty.
    fn content_type(&self) -> String;

    fn is_image(&self) -> bool {
        self.content_type().starts_with(IMAGE_MIME_PREFIX)
    }
}

impl ImageFile for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn content_type(&self) -> String {
        self.type_()
    }
}

/// Reject empty batches and batches containing any non-image file.
///
/// The whole batch is rejected on the first offending file; nothing is
/// filtered out silently.
pub fn validate_batch<F: ImageFile>(files: &[F]) -> AppResult<()> {
    if files.is_empty() {
        return Err(AppError::NoFiles);
    }

    match files.iter().find(|file| !file.is_image()) {
        Some(file) => Err(AppError::NotAnImage { name: file.name() }),
        None => Ok(()),
    }
}
