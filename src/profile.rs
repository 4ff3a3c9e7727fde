use crate::models::{Project, Student, StudentId};
use itertools::Itertools;
use serde::Deserialize;

/// Fields a student may change on their own profile. Anything left `None`
/// keeps its current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub branch: Option<String>,
    pub year: Option<u8>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub projects: Option<Vec<Project>>,
    pub resume_url: Option<String>,
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl ProfileUpdate {
    fn apply(self, student: &mut Student) {
        set(&mut student.name, self.name);
        set(&mut student.email, self.email);
        set(&mut student.branch, self.branch);
        set(&mut student.year, self.year);
        set(&mut student.avatar, self.avatar);
        set(&mut student.bio, self.bio);
        set(&mut student.skills, self.skills.map(|s| s.into_iter().unique().collect()));
        set(&mut student.interests, self.interests);
        set(&mut student.certifications, self.certifications);
        set(&mut student.projects, self.projects);
        if self.resume_url.is_some() {
            student.resume_url = self.resume_url;
        }
    }
}

fn update(students: &[Student], id: &StudentId, patch: impl FnOnce(&mut Student)) -> Vec<Student> {
    let mut patch = Some(patch);
    students
        .iter()
        .map(|student| {
            let mut student = student.clone();
            if &student.id == id {
                if let Some(patch) = patch.take() {
                    patch(&mut student);
                }
            }
            student
        })
        .collect()
}

pub fn edit_profile(students: &[Student], id: &StudentId, changes: ProfileUpdate) -> Vec<Student> {
    update(students, id, |student| changes.apply(student))
}

pub fn add_skill(students: &[Student], id: &StudentId, skill: &str) -> Vec<Student> {
    let skill = skill.trim();
    if skill.is_empty() {
        return students.to_vec();
    }
    update(students, id, |student| {
        if !student.skills.iter().any(|s| s == skill) {
            student.skills.push(skill.to_owned());
        }
    })
}

pub fn remove_skill(students: &[Student], id: &StudentId, skill: &str) -> Vec<Student> {
    update(students, id, |student| student.skills.retain(|s| s != skill))
}

/// The profile shown on the profile tab: the student being viewed when that
/// id resolves, otherwise the current user.
pub fn displayed_student<'a>(students: &'a [Student], viewing: Option<&StudentId>) -> Option<&'a Student> {
    viewing
        .and_then(|id| students.iter().find(|s| &s.id == id))
        .or_else(|| students.iter().find(|s| s.id.is_current()))
}
