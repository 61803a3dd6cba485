use crate::multipart::FormPart;

/// The parts of a form, ordered by name.
///
/// Parts sharing a name stay in the order they were added.
/// Bodies are encoded in this order, not in the order fields were added.
#[derive(Debug, Default)]
pub struct FormPartCollection {
    parts: Vec<FormPart>,
}

impl FormPartCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the part after every part whose name sorts before or equal to it.
    pub fn push(&mut self, part: FormPart) {
        let index = self
            .parts
            .partition_point(|existing| existing.name() <= part.name());

        self.parts.insert(index, part);
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, FormPart> {
        self.parts.iter()
    }

    /// All parts with the given name, in the order they were added.
    pub fn get<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FormPart> + 'a {
        self.parts.iter().filter(move |part| part.name() == name)
    }
}

impl<'a> IntoIterator for &'a FormPartCollection {
    type Item = &'a FormPart;
    type IntoIter = ::std::slice::Iter<'a, FormPart>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
