use super::{Queue, Val};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Integers always order before strings, whichever the direction.
fn order(a: &Val, b: &Val, descending: bool) -> Ordering {
    use Val::*;
    let same_type = match (a, b) {
        (Integer(l), Integer(r)) => l.cmp(r),
        (String(l), String(r)) => l.as_bytes().cmp(r.as_bytes()),
        (Integer(_), String(_)) => return Ordering::Less,
        (String(_), Integer(_)) => return Ordering::Greater,
    };
    if descending {
        same_type.reverse()
    } else {
        same_type
    }
}

fn sort(queue: &mut Queue<Val>, descending: bool) {
    let mut vals = queue.drain();
    vals.sort_by(|a, b| order(a, b, descending));
    queue.append(vals);
}

pub fn sort_up(queue: &mut Queue<Val>) {
    sort(queue, false)
}

pub fn sort_down(queue: &mut Queue<Val>) {
    sort(queue, true)
}

/// Uniform random permutation of the whole queue.
pub fn shuffle<R: Rng + ?Sized>(queue: &mut Queue<Val>, rng: &mut R) {
    let mut vals = queue.drain();
    vals.shuffle(rng);
    queue.append(vals);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn queue(vals: &[Val]) -> Queue<Val> {
        let mut q = Queue::new();
        q.append(vals.to_vec());
        q
    }

    fn contents(q: &Queue<Val>) -> Vec<Val> {
        q.iter().cloned().collect()
    }

    fn int(n: i64) -> Val {
        Val::Integer(n)
    }

    fn text(s: &str) -> Val {
        Val::String(s.to_string())
    }

    #[test]
    fn test_sort_integers_both_ways() {
        let mut q = queue(&[int(3), int(-1), int(2), int(2)]);
        sort_up(&mut q);
        let up = contents(&q);
        assert_eq!(up, vec![int(-1), int(2), int(2), int(3)]);
        sort_down(&mut q);
        let mut reversed = up;
        reversed.reverse();
        assert_eq!(contents(&q), reversed);
    }

    #[test]
    fn test_integers_precede_strings_in_both_directions() {
        let mut q = queue(&[text("b"), int(1), text("a"), int(2)]);
        sort_up(&mut q);
        assert_eq!(contents(&q), vec![int(1), int(2), text("a"), text("b")]);
        sort_down(&mut q);
        assert_eq!(contents(&q), vec![int(2), int(1), text("b"), text("a")]);
    }

    #[test]
    fn test_strings_compare_bytewise() {
        let mut q = queue(&[text("b"), text("B"), text("ab"), text("a")]);
        sort_up(&mut q);
        assert_eq!(
            contents(&q),
            vec![text("B"), text("a"), text("ab"), text("b")]
        );
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let vals: Vec<Val> = (0..32).map(int).collect();
        let mut q = queue(&vals);
        let mut rng = StdRng::seed_from_u64(7);
        shuffle(&mut q, &mut rng);
        let mut shuffled = contents(&q);
        assert_eq!(shuffled.len(), vals.len());
        shuffled.sort_by(|a, b| order(a, b, false));
        assert_eq!(shuffled, vals);
    }

    #[test]
    fn test_shuffle_empty_queue() {
        let mut q = queue(&[]);
        shuffle(&mut q, &mut StdRng::seed_from_u64(1));
        assert!(q.is_empty());
    }
}
