#![forbid(unsafe_code)]

/// Parameters of a GetDetails request, shared by every chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Localized text to return (`ELanguage`).
    pub language: String,
    /// Revision to return (`EPublishedFileRevision`).
    pub desired_revision: String,
    /// Expected consumer app. Zero disables the scope check.
    pub app_id: u64,
    /// Return playtime stats for this many days before today.
    pub return_playtime_stats: u32,
    pub include_tags: bool,
    pub include_additional_previews: bool,
    pub include_children: bool,
    pub include_kv_tags: bool,
    pub include_votes: bool,
    pub short_description: bool,
    pub include_for_sale_data: bool,
    pub include_metadata: bool,
    pub strip_description_bbcode: bool,
    pub include_reactions: bool,
    /// Return hidden items (admin tools only).
    pub admin_query: bool,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            language: String::new(),
            desired_revision: String::new(),
            app_id: 0,
            return_playtime_stats: 0,
            include_tags: false,
            include_additional_previews: false,
            include_children: false,
            include_kv_tags: true,
            include_votes: false,
            short_description: true,
            include_for_sale_data: false,
            include_metadata: false,
            strip_description_bbcode: true,
            include_reactions: false,
            admin_query: false,
        }
    }
}

impl Query {
    pub fn with_app_id(mut self, app_id: u64) -> Self {
        self.app_id = app_id;
        self
    }

    /// Query string pairs for one chunk.
    ///
    /// Empty strings, zero numbers and false flags are left out.
    pub fn params(&self, key: &str, chunk: &[u64]) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(chunk.len() + 16);
        params.push(("key".to_owned(), key.to_owned()));
        params.extend(
            chunk
                .iter()
                .enumerate()
                .map(|(i, id)| (format!("publishedfileids[{i}]"), id.to_string())),
        );

        let text = [
            ("language", self.language.as_str()),
            ("desired_revision", self.desired_revision.as_str()),
        ];
        params.extend(
            text.into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(name, value)| (name.to_owned(), value.to_owned())),
        );

        let numbers = [
            ("appid", self.app_id),
            ("return_playtime_stats", u64::from(self.return_playtime_stats)),
        ];
        params.extend(
            numbers
                .into_iter()
                .filter(|&(_, value)| value != 0)
                .map(|(name, value)| (name.to_owned(), value.to_string())),
        );

        let flags = [
            ("includetags", self.include_tags),
            ("includeadditionalpreviews", self.include_additional_previews),
            ("includechildren", self.include_children),
            ("includekvtags", self.include_kv_tags),
            ("includevotes", self.include_votes),
            ("short_description", self.short_description),
            ("includeforsaledata", self.include_for_sale_data),
            ("includemetadata", self.include_metadata),
            ("strip_description_bbcode", self.strip_description_bbcode),
            ("includereactions", self.include_reactions),
            ("admin_query", self.admin_query),
        ];
        params.extend(
            flags
                .into_iter()
                .filter(|&(_, enabled)| enabled)
                .map(|(name, _)| (name.to_owned(), "true".to_owned())),
        );

        params
    }
}
