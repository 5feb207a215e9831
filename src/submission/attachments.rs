// =============================================================================
// Next Frame Web - Photo Attachments
// =============================================================================
// Table of Contents:
// 1. Limits
// 2. Attachment Trait
// 3. Normalizer
// 4. Attachment Set
// =============================================================================

use crate::services::toast::Notice;

// -----------------------------------------------------------------------------
// 1. Limits
// -----------------------------------------------------------------------------

pub const MAX_ATTACHMENTS: usize = 3;
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;
pub const IMAGE_MIME_PREFIX: &str = "image/";

// -----------------------------------------------------------------------------
// 2. Attachment Trait
// -----------------------------------------------------------------------------

/// A user-selected file.
pub trait Attachment: Clone + 'static {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;
    fn byte_size(&self) -> u64;

    fn is_image(&self) -> bool {
        self.mime_type().starts_with(IMAGE_MIME_PREFIX)
    }
}

impl Attachment for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }

    fn byte_size(&self) -> u64 {
        self.size() as u64
    }
}

// -----------------------------------------------------------------------------
// 3. Normalizer
// -----------------------------------------------------------------------------

/// Result of constraining a candidate file list.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalized<F> {
    pub accepted: Vec<F>,
    pub skipped_non_image: usize,
    pub skipped_oversized: usize,
    pub skipped_over_limit: usize,
}

impl<F> Normalized<F> {
    /// One notice for the whole batch when oversized photos were dropped.
    pub fn advisory(&self) -> Option<Notice> {
        (self.skipped_oversized > 0).then(oversized_notice)
    }
}

fn oversized_notice() -> Notice {
    Notice::advisory(
        "Some photos were skipped",
        "Each photo must be 10 MB or smaller.",
    )
}

/// Merge `incoming` after `existing` and keep only what may be attached:
/// images, at most 10 MiB each, first three by insertion order.
pub fn normalize<F, I>(existing: &[F], incoming: I) -> Normalized<F>
where
    F: Attachment,
    I: IntoIterator<Item = F>,
{
    let mut skipped_non_image = 0;
    let mut skipped_oversized = 0;

    let mut accepted: Vec<F> = existing
        .iter()
        .cloned()
        .chain(incoming)
        .filter(|file| {
            let keep = file.is_image();
            if !keep {
                skipped_non_image += 1;
            }
            keep
        })
        .filter(|file| {
            let keep = file.byte_size() <= MAX_ATTACHMENT_BYTES;
            if !keep {
                skipped_oversized += 1;
            }
            keep
        })
        .collect();

    let skipped_over_limit = accepted.len().saturating_sub(MAX_ATTACHMENTS);
    accepted.truncate(MAX_ATTACHMENTS);

    if skipped_non_image + skipped_oversized + skipped_over_limit > 0 {
        log::debug!(
            "attachments: kept {}, skipped {skipped_non_image} non-image, \
             {skipped_oversized} oversized, {skipped_over_limit} over limit",
            accepted.len()
        );
    }

    Normalized {
        accepted,
        skipped_non_image,
        skipped_oversized,
        skipped_over_limit,
    }
}

// -----------------------------------------------------------------------------
// 4. Attachment Set
// -----------------------------------------------------------------------------

/// The photos a profile submission will carry.
///
/// Every mutation goes through [`normalize`], so the set always satisfies
/// the limits above. Callers mirror [`AttachmentSet::as_slice`] into the
/// native file input after each change.
#[derive(Clone, Debug, PartialEq)]
pub struct AttachmentSet<F> {
    files: Vec<F>,
}

impl<F: Attachment> AttachmentSet<F> {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add picked or dropped files. Returns the advisory to show, if any.
    pub fn add<I>(&mut self, incoming: I) -> Option<Notice>
    where
        I: IntoIterator<Item = F>,
    {
        let normalized = normalize(&self.files, incoming);
        let advisory = normalized.advisory();
        self.files = normalized.accepted;
        advisory
    }

    /// Remove the file at `index`; later files shift down by one.
    pub fn remove(&mut self, index: usize) -> Option<F> {
        let removed = self.files.get(index).cloned()?;
        let remaining: Vec<F> = self
            .files
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, f)| f.clone())
            .collect();
        self.files = normalize(&remaining, std::iter::empty()).accepted;
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn as_slice(&self) -> &[F] {
        &self.files
    }

    pub fn to_vec(&self) -> Vec<F> {
        self.files.clone()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.files.len() >= MAX_ATTACHMENTS
    }

    /// Slots left before the cap.
    pub fn remaining(&self) -> usize {
        MAX_ATTACHMENTS.saturating_sub(self.files.len())
    }
}

impl<F: Attachment> Default for AttachmentSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    const MB: u64 = 1_000_000;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct FakeFile {
        pub name: &'static str,
        pub mime: &'static str,
        pub size: u64,
    }

    impl Attachment for FakeFile {
        fn file_name(&self) -> String {
            self.name.to_string()
        }

        fn mime_type(&self) -> String {
            self.mime.to_string()
        }

        fn byte_size(&self) -> u64 {
            self.size
        }
    }

    pub(crate) fn photo(name: &'static str, size: u64) -> FakeFile {
        FakeFile { name, mime: "image/jpeg", size }
    }

    fn names(files: &[FakeFile]) -> Vec<&'static str> {
        files.iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_caps_at_first_three() {
        let incoming = vec![
            photo("a.jpg", MB),
            photo("b.jpg", MB),
            photo("c.jpg", MB),
            photo("d.jpg", MB),
        ];

        let result = normalize(&[], incoming);

        assert_eq!(names(&result.accepted), ["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(result.skipped_over_limit, 1);
        assert!(result.advisory().is_none());
    }

    #[test]
    fn test_existing_files_win_over_new_ones() {
        let existing = vec![photo("old-1.jpg", MB), photo("old-2.jpg", MB)];
        let result = normalize(&existing, vec![photo("new-1.jpg", MB), photo("new-2.jpg", MB)]);

        assert_eq!(names(&result.accepted), ["old-1.jpg", "old-2.jpg", "new-1.jpg"]);
    }

    #[test]
    fn test_oversized_photo_dropped_with_single_advisory() {
        let result = normalize(&[], vec![photo("ok.jpg", 2 * MB), photo("huge.jpg", 12 * MB)]);

        assert_eq!(names(&result.accepted), ["ok.jpg"]);
        assert_eq!(result.skipped_oversized, 1);

        let advisory = result.advisory();
        assert!(advisory.is_some());
        assert!(!advisory.map(|n| n.is_destructive()).unwrap_or(true));
    }

    #[test]
    fn test_many_oversized_photos_share_one_advisory() {
        let mut set = AttachmentSet::new();
        let notice = set.add(vec![
            photo("huge-1.jpg", 11 * MB),
            photo("huge-2.jpg", 20 * MB),
            photo("ok.png", MB),
        ]);

        assert!(notice.is_some());
        assert_eq!(names(set.as_slice()), ["ok.png"]);
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let result = normalize(&[], vec![photo("edge.jpg", MAX_ATTACHMENT_BYTES)]);
        assert_eq!(result.accepted.len(), 1);

        let result = normalize(&[], vec![photo("over.jpg", MAX_ATTACHMENT_BYTES + 1)]);
        assert!(result.accepted.is_empty());
    }

    #[test]
    fn test_non_images_dropped_silently() {
        let pdf = FakeFile { name: "resume.pdf", mime: "application/pdf", size: MB };
        let untyped = FakeFile { name: "mystery", mime: "", size: MB };

        let result = normalize(&[], vec![pdf, photo("headshot.jpg", MB), untyped]);

        assert_eq!(names(&result.accepted), ["headshot.jpg"]);
        assert_eq!(result.skipped_non_image, 2);
        assert!(result.advisory().is_none());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let first = normalize(
            &[],
            vec![
                photo("a.jpg", MB),
                FakeFile { name: "notes.txt", mime: "text/plain", size: 10 },
                photo("b.jpg", 15 * MB),
                photo("c.jpg", MB),
                photo("d.jpg", MB),
                photo("e.jpg", MB),
            ],
        );
        let second = normalize(&first.accepted, std::iter::empty());

        assert_eq!(second.accepted, first.accepted);
        assert_eq!(second.skipped_non_image + second.skipped_oversized + second.skipped_over_limit, 0);
    }

    #[test]
    fn test_invariants_hold_for_mixed_batches() {
        let sizes = [0, MB, 9 * MB, MAX_ATTACHMENT_BYTES, 11 * MB, 50 * MB];
        let mimes = ["image/png", "image/webp", "video/mp4", "text/plain"];

        let mut set = AttachmentSet::new();
        for (i, size) in sizes.iter().enumerate() {
            let batch: Vec<FakeFile> = mimes
                .iter()
                .map(|mime| FakeFile { name: "f", mime: *mime, size: *size + i as u64 % 2 })
                .collect();
            set.add(batch);

            assert!(set.len() <= MAX_ATTACHMENTS);
            assert!(set.as_slice().iter().all(|f| f.mime.starts_with("image/")));
            assert!(set.as_slice().iter().all(|f| f.size <= MAX_ATTACHMENT_BYTES));
        }
    }

    #[test]
    fn test_remove_shifts_later_files_down() {
        let mut set = AttachmentSet::new();
        set.add(vec![photo("a.jpg", MB), photo("b.jpg", MB), photo("c.jpg", MB)]);

        let removed = set.remove(1);

        assert_eq!(removed.map(|f| f.name), Some("b.jpg"));
        assert_eq!(names(set.as_slice()), ["a.jpg", "c.jpg"]);
        assert_eq!(set.remaining(), 1);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut set = AttachmentSet::new();
        set.add(vec![photo("a.jpg", MB)]);

        assert!(set.remove(3).is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_full_set_ignores_further_photos() {
        let mut set = AttachmentSet::new();
        set.add(vec![photo("a.jpg", MB), photo("b.jpg", MB), photo("c.jpg", MB)]);
        assert!(set.is_full());

        set.add(vec![photo("late.jpg", MB)]);
        assert_eq!(names(set.as_slice()), ["a.jpg", "b.jpg", "c.jpg"]);

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.remaining(), MAX_ATTACHMENTS);
    }
}
