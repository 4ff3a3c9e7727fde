//! Connection requests between students.
//!
//! A pair of students is either unrelated, has one request pending, or is
//! connected. Every function takes the current roster and returns a new one;
//! both sides of a connection change in the same returned roster.

use crate::models::{Student, StudentId};

fn find<'a>(students: &'a [Student], id: &StudentId) -> Option<&'a Student> {
    students.iter().find(|s| &s.id == id)
}

/// Queues `requester` on `target`'s pending requests.
///
/// Nothing changes when the request is already pending, when the two are
/// already connected, when a student targets themselves, or when `target`
/// is already waiting on `requester` to answer their own request.
pub fn send_connection_request(
    students: &[Student],
    requester: &StudentId,
    target: &StudentId,
) -> Vec<Student> {
    let blocked = requester == target
        || match (find(students, requester), find(students, target)) {
            (Some(from), Some(to)) => {
                to.has_pending_from(requester)
                    || to.is_connected_to(requester)
                    || from.has_pending_from(target)
            }
            _ => true,
        };

    if blocked {
        return students.to_vec();
    }

    students
        .iter()
        .map(|student| {
            if &student.id == target {
                let mut student = student.clone();
                student.pending_requests.push(requester.clone());
                student
            } else {
                student.clone()
            }
        })
        .collect()
}

pub fn accept_connection_request(
    students: &[Student],
    self_id: &StudentId,
    requester: &StudentId,
) -> Vec<Student> {
    let pending = find(students, self_id).map_or(false, |s| s.has_pending_from(requester));
    if !pending || find(students, requester).is_none() {
        return students.to_vec();
    }

    students
        .iter()
        .map(|student| {
            let mut student = student.clone();
            if &student.id == self_id {
                student.pending_requests.retain(|id| id != requester);
                if !student.is_connected_to(requester) {
                    student.connections.push(requester.clone());
                }
            } else if &student.id == requester && !student.is_connected_to(self_id) {
                student.connections.push(self_id.clone());
            }
            student
        })
        .collect()
}

pub fn reject_connection_request(
    students: &[Student],
    self_id: &StudentId,
    requester: &StudentId,
) -> Vec<Student> {
    students
        .iter()
        .map(|student| {
            let mut student = student.clone();
            if &student.id == self_id {
                student.pending_requests.retain(|id| id != requester);
            }
            student
        })
        .collect()
}

pub fn is_connected(students: &[Student], a: &StudentId, b: &StudentId) -> bool {
    find(students, a).map_or(false, |s| s.is_connected_to(b))
}

/// Students connected to `id`, in roster order.
pub fn connections_of<'a>(students: &'a [Student], id: &StudentId) -> Vec<&'a Student> {
    let Some(me) = find(students, id) else {
        return Vec::new();
    };
    students
        .iter()
        .filter(|s| me.connections.contains(&s.id))
        .collect()
}

/// Students whose requests to `id` are still unanswered, in roster order.
pub fn pending_requests_of<'a>(students: &'a [Student], id: &StudentId) -> Vec<&'a Student> {
    let Some(me) = find(students, id) else {
        return Vec::new();
    };
    students
        .iter()
        .filter(|s| me.pending_requests.contains(&s.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    fn roster() -> Vec<Student> {
        Seed::embedded().unwrap().students
    }

    fn get<'a>(students: &'a [Student], id: &str) -> &'a Student {
        find(students, &StudentId::from(id)).unwrap()
    }

    fn assert_consistent(students: &[Student]) {
        for a in students {
            for b in &a.connections {
                let other = get(students, &b.0);
                assert!(other.is_connected_to(&a.id), "{} -> {} is one-sided", a.id, b);
                assert!(!a.has_pending_from(b), "{} both pending and connected to {}", a.id, b);
            }
        }
    }

    #[test]
    fn request_then_accept_connects_both_sides() {
        let (a, b) = (StudentId::from("5"), StudentId::from("3"));
        let students = roster();
        assert!(!is_connected(&students, &a, &b));

        let students = send_connection_request(&students, &a, &b);
        assert!(get(&students, "3").has_pending_from(&a));

        let students = accept_connection_request(&students, &b, &a);
        assert!(get(&students, "5").is_connected_to(&b));
        assert!(get(&students, "3").is_connected_to(&a));
        assert!(!get(&students, "3").has_pending_from(&a));
        assert!(!get(&students, "5").has_pending_from(&b));
        assert_consistent(&students);
    }

    #[test]
    fn request_then_reject_leaves_them_apart() {
        let (a, b) = (StudentId::from("6"), StudentId::from("2"));
        let students = send_connection_request(&roster(), &a, &b);
        let students = reject_connection_request(&students, &b, &a);

        assert!(!get(&students, "6").is_connected_to(&b));
        assert!(!get(&students, "2").is_connected_to(&a));
        assert!(!get(&students, "2").has_pending_from(&a));
        assert_consistent(&students);
    }

    #[test]
    fn duplicate_request_is_ignored() {
        let (a, b) = (StudentId::current(), StudentId::from("5"));
        let once = send_connection_request(&roster(), &a, &b);
        let twice = send_connection_request(&once, &a, &b);
        assert_eq!(once, twice);
        assert_eq!(get(&twice, "5").pending_requests, vec![a]);
    }

    #[test]
    fn request_to_connection_or_self_is_ignored() {
        let students = roster();
        let me = StudentId::current();
        assert_eq!(send_connection_request(&students, &me, &StudentId::from("1")), students);
        assert_eq!(send_connection_request(&students, &me, &me), students);
    }

    #[test]
    fn counter_request_is_ignored() {
        // 3 already asked the current user
        let students = roster();
        let after = send_connection_request(&students, &StudentId::current(), &StudentId::from("3"));
        assert_eq!(after, students);
    }

    #[test]
    fn accept_without_request_changes_nothing() {
        let students = roster();
        let after = accept_connection_request(&students, &StudentId::current(), &StudentId::from("6"));
        assert_eq!(after, students);
    }

    #[test]
    fn seeded_requests_can_be_accepted() {
        let me = StudentId::current();
        let students = accept_connection_request(&roster(), &me, &StudentId::from("3"));
        let names: Vec<_> = connections_of(&students, &me).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Alex Chen", "Sarah Martinez", "Raj Patel"]);

        let pending: Vec<_> = pending_requests_of(&students, &me).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(pending, ["Emily Johnson"]);
        assert_consistent(&students);
    }

    #[test]
    fn unknown_student_has_no_network() {
        let students = roster();
        assert!(connections_of(&students, &StudentId::from("nobody")).is_empty());
        assert!(pending_requests_of(&students, &StudentId::from("nobody")).is_empty());
    }
}
