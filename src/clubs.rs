use crate::models::{Club, ClubId, Student, StudentId};
use serde::Serialize;

const MEMBER_PREVIEW: usize = 5;

fn update(clubs: &[Club], id: &ClubId, patch: impl Fn(&mut Club)) -> Vec<Club> {
    clubs
        .iter()
        .map(|club| {
            let mut club = club.clone();
            if &club.id == id {
                patch(&mut club);
            }
            club
        })
        .collect()
}

pub fn join_club(clubs: &[Club], id: &ClubId, user: &StudentId) -> Vec<Club> {
    update(clubs, id, |club| {
        if !club.members.contains(user) {
            club.members.push(user.clone());
        }
    })
}

// The admin may leave too; nobody takes over.
pub fn leave_club(clubs: &[Club], id: &ClubId, user: &StudentId) -> Vec<Club> {
    update(clubs, id, |club| club.members.retain(|member| member != user))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPreview<'a> {
    pub id: &'a StudentId,
    pub name: &'a str,
    pub avatar: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubView<'a> {
    #[serde(flatten)]
    pub club: &'a Club,
    pub is_member: bool,
    pub member_count: usize,
    pub admin_name: Option<&'a str>,
    pub member_preview: Vec<MemberPreview<'a>>,
}

impl<'a> ClubView<'a> {
    pub fn new(club: &'a Club, students: &'a [Student], viewer: &StudentId) -> Self {
        let lookup = |id: &StudentId| students.iter().find(|s| &s.id == id);

        Self {
            club,
            is_member: club.members.contains(viewer),
            member_count: club.members.len(),
            admin_name: lookup(&club.admin).map(|s| s.name.as_str()),
            member_preview: club
                .members
                .iter()
                .take(MEMBER_PREVIEW)
                .filter_map(|id| lookup(id))
                .map(|s| MemberPreview {
                    id: &s.id,
                    name: &s.name,
                    avatar: &s.avatar,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    #[test]
    fn join_then_leave_restores_members() {
        let clubs = Seed::embedded().unwrap().clubs;
        let id = ClubId::from("club3");
        let user = StudentId::from("2");

        let joined = join_club(&clubs, &id, &user);
        assert_eq!(joined[2].members.last(), Some(&user));
        let left = leave_club(&joined, &id, &user);
        assert_eq!(left, clubs);
    }

    #[test]
    fn join_is_idempotent() {
        let clubs = Seed::embedded().unwrap().clubs;
        let id = ClubId::from("club1");
        let after = join_club(&clubs, &id, &StudentId::current());
        assert_eq!(after, clubs);
    }

    #[test]
    fn admin_can_leave() {
        let clubs = Seed::embedded().unwrap().clubs;
        let id = ClubId::from("club2");
        let admin = StudentId::from("1");

        let after = leave_club(&clubs, &id, &admin);
        assert!(!after[1].members.contains(&admin));
        assert_eq!(after[1].admin, admin);
    }

    #[test]
    fn view_resolves_members() {
        let seed = Seed::embedded().unwrap();
        let view = ClubView::new(&seed.clubs[0], &seed.students, &StudentId::current());

        assert!(view.is_member);
        assert_eq!(view.member_count, 5);
        assert_eq!(view.admin_name, Some("Raj Patel"));
        let names: Vec<_> = view.member_preview.iter().map(|m| m.name).collect();
        assert_eq!(names, ["Alex Chen", "Sarah Martinez", "Raj Patel", "Michael Lee", "You"]);

        let view = ClubView::new(&seed.clubs[2], &seed.students, &StudentId::from("1"));
        assert!(!view.is_member);
    }
}
