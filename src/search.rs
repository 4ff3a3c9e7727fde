use crate::models::Student;
use itertools::Itertools;
use serde::Deserialize;

pub const ALL: &str = "all";
pub const YEAR_OPTIONS: [&str; 4] = [ALL, "2", "3", "4"];

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default, rename = "q")]
    pub query: String,
    #[serde(default = "all")]
    pub branch: String,
    #[serde(default = "all")]
    pub year: String,
}

fn all() -> String {
    ALL.to_owned()
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            branch: all(),
            year: all(),
        }
    }
}

impl SearchQuery {
    pub fn matches(&self, student: &Student) -> bool {
        !student.id.is_current()
            && self.matches_text(student)
            && (self.branch == ALL || self.branch == student.branch)
            && self.matches_year(student)
    }

    fn matches_text(&self, student: &Student) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        let hit = |field: &String| field.to_lowercase().contains(&needle);

        hit(&student.name) || student.skills.iter().any(hit) || student.interests.iter().any(hit)
    }

    // a year that is not a number matches nobody
    fn matches_year(&self, student: &Student) -> bool {
        self.year == ALL || self.year.parse::<u8>().map_or(false, |year| year == student.year)
    }
}

pub fn search<'a>(students: &'a [Student], query: &SearchQuery) -> Vec<&'a Student> {
    students.iter().filter(|s| query.matches(s)).collect()
}

/// `all` followed by every branch in the order it first appears.
pub fn branch_options(students: &[Student]) -> Vec<&str> {
    std::iter::once(ALL)
        .chain(students.iter().map(|s| s.branch.as_str()).unique())
        .collect()
}
