//! Disjoint-set union with path compression, scoped to a single Kruskal run.

#[derive(Debug, Clone)]
pub(super) struct Dsu {
    // `None` marks a root.
    parent: Vec<Option<usize>>,
}

impl Dsu {
    pub(super) fn new(n: usize) -> Self {
        Self {
            parent: vec![None; n],
        }
    }

    pub(super) fn find(&mut self, v: usize) -> usize {
        let mut root = v;
        while let Some(p) = self.parent[root] {
            root = p;
        }

        let mut cur = v;
        while let Some(p) = self.parent[cur] {
            if p != root {
                self.parent[cur] = Some(root);
            }
            cur = p;
        }
        root
    }

    /// Attaches the root of `x` under the root of `y`. Returns whether two sets were merged.
    pub(super) fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }
        self.parent[rx] = Some(ry);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Dsu;

    #[test]
    fn singletons_are_their_own_roots() {
        let mut dsu = Dsu::new(3);
        assert_eq!((dsu.find(0), dsu.find(1), dsu.find(2)), (0, 1, 2));
    }

    #[test]
    fn union_attaches_first_root_under_second() {
        let mut dsu = Dsu::new(4);
        assert!(dsu.union(0, 1));
        assert_eq!(dsu.find(0), 1);
        assert!(dsu.union(1, 2));
        assert_eq!(dsu.find(0), 2);
        assert!(!dsu.union(0, 2));
        assert_ne!(dsu.find(3), dsu.find(0));
    }

    #[test]
    fn find_compresses_the_path() {
        let mut dsu = Dsu::new(4);
        dsu.union(0, 1);
        dsu.union(1, 2);
        dsu.union(2, 3);
        assert_eq!(dsu.find(0), 3);
        assert_eq!(dsu.parent[0], Some(3));
        assert_eq!(dsu.parent[1], Some(3));
    }
}
