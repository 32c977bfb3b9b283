use std::collections::BTreeSet;

/// Answers whether a driver identifier can be loaded in the current runtime
pub trait ClassLoadingContext {
    fn is_present(&self, class_name: &str) -> bool;
}

impl<F> ClassLoadingContext for F
where
    F: Fn(&str) -> bool,
{
    fn is_present(&self, class_name: &str) -> bool {
        self(class_name)
    }
}

/// Driver identifiers known to be installed, usually read from `[drivers]` config
#[derive(Debug, Clone, Default)]
pub struct DriverCatalog {
    classes: BTreeSet<String>,
}

impl DriverCatalog {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add(&mut self, class_name: impl Into<String>) {
        self.classes.insert(class_name.into());
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl ClassLoadingContext for DriverCatalog {
    fn is_present(&self, class_name: &str) -> bool {
        self.classes.contains(class_name)
    }
}
