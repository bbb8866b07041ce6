use clap::ValueEnum;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FolderNaming {
    #[default]
    Verbatim,

    /// An underscore before every character and one at the end, so
    /// `"ab"` becomes `"_a_b_"`.
    Interleave,

    Underscore,
}

impl FolderNaming {
    pub fn derive(self, category: &str) -> String {
        match self {
            FolderNaming::Verbatim => category.to_string(),
            FolderNaming::Interleave => {
                let mut name = String::with_capacity(category.len() * 2 + 1);
                name.push('_');
                for c in category.chars() {
                    name.push(c);
                    name.push('_');
                }
                name
            }
            FolderNaming::Underscore => category.replace(' ', "_"),
        }
    }

    pub fn file_name(self, category: &str, index: usize) -> String {
        format!("{}_{}.jpg", self.derive(category), index)
    }
}
