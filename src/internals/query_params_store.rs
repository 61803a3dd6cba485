use ::serde::Serialize;
use ::url::Url;

use crate::Result;

/// Query string fragments, kept in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParamsStore {
    fragments: Vec<String>,
}

impl QueryParamsStore {
    pub fn add<V>(&mut self, query_params: V) -> Result<()>
    where
        V: Serialize,
    {
        let fragment = ::serde_urlencoded::to_string(query_params)?;
        if !fragment.is_empty() {
            self.fragments.push(fragment);
        }

        Ok(())
    }

    pub fn add_raw(&mut self, fragment: &str) {
        self.fragments.push(fragment.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Appends the stored fragments after any query already on the url.
    pub fn apply_to(&self, url: &mut Url) {
        if self.is_empty() {
            return;
        }

        let mut query = url.query().unwrap_or_default().to_string();
        for fragment in &self.fragments {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(fragment);
        }

        url.set_query(Some(&query));
    }
}
