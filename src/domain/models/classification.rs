//! Partition of audited users into ignored, compliant and non-compliant.

use std::cmp::Ordering;

/// One of the three disjoint result sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Ignored,
    Compliant,
    NonCompliant,
}

impl Bucket {
    /// Report order.
    pub const ALL: [Self; 3] = [Self::Ignored, Self::Compliant, Self::NonCompliant];

    /// Name of the file the bucket is written to.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Ignored => "IGNORED_GITHUB_USERNAMES.txt",
            Self::Compliant => "COMPLIANT_GITHUB_USERNAMES.txt",
            Self::NonCompliant => "NONCOMPLIANT_GITHUB_USERNAMES.txt",
        }
    }

    /// Human-readable summary label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ignored => "Ignored users, per exception list for GPG key setup",
            Self::Compliant => "Users with GPG keys",
            Self::NonCompliant => "Users without GPG keys",
        }
    }
}

/// Classified candidates. Each username is pushed into exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    ignored: Vec<String>,
    compliant: Vec<String>,
    non_compliant: Vec<String>,
}

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bucket: Bucket, username: impl Into<String>) {
        self.bucket_mut(bucket).push(username.into());
    }

    pub fn users(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Ignored => &self.ignored,
            Bucket::Compliant => &self.compliant,
            Bucket::NonCompliant => &self.non_compliant,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<String> {
        match bucket {
            Bucket::Ignored => &mut self.ignored,
            Bucket::Compliant => &mut self.compliant,
            Bucket::NonCompliant => &mut self.non_compliant,
        }
    }

    /// Sum of the three bucket sizes.
    pub fn total(&self) -> usize {
        self.ignored.len() + self.compliant.len() + self.non_compliant.len()
    }

    /// Share of the total in `bucket`, in percent. Zero when there are no users.
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, bucket: Bucket) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.users(bucket).len() as f64 / total as f64 * 100.0
    }

    /// The bucket's usernames in case-insensitive order.
    pub fn sorted(&self, bucket: Bucket) -> Vec<String> {
        let mut users = self.users(bucket).to_vec();
        users.sort_by(|a, b| case_insensitive_cmp(a, b));
        users
    }
}

/// Case-insensitive ordering with a byte-order tie break, so the result
/// does not depend on input order.
pub fn case_insensitive_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
