use std::collections::HashMap;

/// Display text for every status the homework API can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictTable {
    verdicts: HashMap<String, String>,
}

impl VerdictTable {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        VerdictTable {
            verdicts: entries
                .into_iter()
                .map(|(status, text)| (status.into(), text.into()))
                .collect(),
        }
    }

    pub fn get(&self, status: &str) -> Option<&str> {
        self.verdicts.get(status).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}

impl Default for VerdictTable {
    fn default() -> Self {
        VerdictTable::new([
            ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
            ("reviewing", "Работа взята на проверку ревьюером."),
            ("rejected", "Работа проверена: у ревьюера есть замечания."),
        ])
    }
}
