//! Domain-pruning passes: the AC-3 arc-consistency engine and the
//! forward-checking propagator used during search.

use tracing::debug;

use crate::solver::{
    constraint::Constraint,
    csp::Csp,
    engine::{SearchStats, VariableId},
    solution::{Assignment, Domain, Domains},
    work_list::{Arc, WorkList},
};

impl Csp {
    /// Enforces arc consistency with the AC-3 algorithm.
    ///
    /// `assignment` defaults to the empty assignment and `domains` to each
    /// variable's full static domain; both defaults are resolved here, at
    /// the call site of the pass, never cached.
    ///
    /// Returns the pruned domains, or `None` if some domain was driven
    /// empty, meaning the problem is globally inconsistent.
    ///
    /// Constraints are instantiated two variables at a time, so for scopes
    /// wider than two this is a pairwise relaxation rather than full
    /// generalized arc consistency: sound (it never removes a value that
    /// belongs to an actual solution), but it may under-prune wide
    /// constraints such as an all-different over nine variables.
    pub fn ac3(&self, assignment: Option<&Assignment>, domains: Option<&Domains>) -> Option<Domains> {
        self.ac3_traced(assignment, domains, &mut SearchStats::default())
    }

    pub(crate) fn ac3_traced(
        &self,
        assignment: Option<&Assignment>,
        domains: Option<&Domains>,
        stats: &mut SearchStats,
    ) -> Option<Domains> {
        let empty = Assignment::new();
        let assignment = assignment.unwrap_or(&empty);
        let mut domains = match domains {
            Some(domains) => domains.clone(),
            None => self.initial_domains(),
        };

        // Seed the worklist with every directed arc between unassigned
        // variables co-occurring in a constraint's scope.
        let mut worklist = WorkList::new();
        for (constraint_id, constraint) in self.constraints().iter().enumerate() {
            for &xi in constraint.variables() {
                if assignment.contains(xi) {
                    continue;
                }
                for xj in constraint.related_variables(xi) {
                    if !assignment.contains(xj) {
                        worklist.push_back(Arc {
                            xi,
                            xj,
                            constraint_id,
                        });
                    }
                }
            }
        }

        while let Some(arc) = worklist.pop_front() {
            let constraint = &self.constraints()[arc.constraint_id];
            let per_constraint = stats.constraint_stats.entry(arc.constraint_id).or_default();
            per_constraint.revisions += 1;

            let start_time = std::time::Instant::now();
            let revised = self.revise(arc.xi, arc.xj, constraint.as_ref(), assignment, &mut domains);
            per_constraint.time_spent_micros += start_time.elapsed().as_micros() as u64;

            if revised {
                per_constraint.prunings += 1;

                if domains.get(&arc.xi).unwrap().is_empty() {
                    debug!(variable = arc.xi, "domain wiped out during arc consistency");
                    return None;
                }

                // The domain of `xi` shrank: re-check every arc pointing at
                // it through any constraint, to propagate the tightening.
                for &other_id in self.graph().constraints_on(arc.xi) {
                    for neighbor in self.constraints()[other_id].related_variables(arc.xi) {
                        if neighbor != arc.xj && !assignment.contains(neighbor) {
                            worklist.push_back(Arc {
                                xi: neighbor,
                                xj: arc.xi,
                                constraint_id: other_id,
                            });
                        }
                    }
                }
            }
        }

        debug!("arc consistency established");
        Some(domains)
    }

    /// Removes from `xi`'s current domain every value with no supporting
    /// value in `xj`'s current domain. Support is judged by instantiating
    /// only `xi` and `xj` on top of the existing partial assignment.
    /// Returns whether anything was removed.
    fn revise(
        &self,
        xi: VariableId,
        xj: VariableId,
        constraint: &dyn Constraint,
        assignment: &Assignment,
        domains: &mut Domains,
    ) -> bool {
        let xi_domain = domains.get(&xi).unwrap().clone();
        let xj_domain = domains.get(&xj).unwrap().clone();

        let supported: Domain = xi_domain
            .iter()
            .copied()
            .filter(|&a| {
                let probe = assignment.with(xi, a);
                xj_domain
                    .iter()
                    .copied()
                    .any(|b| constraint.is_satisfied(&probe.with(xj, b)))
            })
            .collect();

        if supported.len() < xi_domain.len() {
            domains.insert(xi, supported);
            true
        } else {
            false
        }
    }

    /// Prunes the domains of `var`'s still-unassigned neighbours after a
    /// tentative assignment to `var`.
    ///
    /// `assignment` must already contain the tentative binding for `var`.
    /// Returns a fresh snapshot with the neighbours pruned (variables not
    /// touched by `var`'s constraints are carried over unchanged), or
    /// `None` as soon as some neighbour's domain is emptied. The input
    /// `domains` map is never modified, so it remains valid for sibling
    /// branches.
    pub fn forward_check(
        &self,
        var: VariableId,
        assignment: &Assignment,
        domains: &Domains,
    ) -> Option<Domains> {
        let mut pruned = domains.clone();

        for &constraint_id in self.graph().constraints_on(var) {
            let constraint = &self.constraints()[constraint_id];
            for neighbor in constraint.related_variables(var) {
                if assignment.contains(neighbor) {
                    continue;
                }
                let neighbor_domain = pruned.get(&neighbor).unwrap().clone();
                let kept: Domain = neighbor_domain
                    .iter()
                    .copied()
                    .filter(|&candidate| {
                        constraint.is_satisfied(&assignment.with(neighbor, candidate))
                    })
                    .collect();

                if kept.is_empty() {
                    debug!(variable = neighbor, "forward check emptied a neighbour domain");
                    return None;
                }
                if kept.len() < neighbor_domain.len() {
                    pruned.insert(neighbor, kept);
                }
            }
        }

        Some(pruned)
    }
}

#[cfg(test)]
mod tests {
    use im::ordset;
    use pretty_assertions::assert_eq;

    use crate::solver::{
        constraint::Constraint,
        constraints::all_different::AllDifferentConstraint,
        csp::Csp,
        solution::Assignment,
        variable::Variable,
    };

    fn all_different_over(
        names_and_domains: &[(&str, &[i64])],
    ) -> Csp {
        let variables = names_and_domains
            .iter()
            .map(|(name, domain)| Variable::new(*name, domain.iter().copied()))
            .collect::<Vec<_>>();
        let scope = (0..variables.len()).collect();
        let constraints: Vec<Box<dyn Constraint>> =
            vec![Box::new(AllDifferentConstraint::new(scope))];
        Csp::new(variables, constraints).unwrap()
    }

    #[test]
    fn ac3_prunes_against_a_singleton_peer() {
        let csp = all_different_over(&[("x1", &[1, 2, 3]), ("x2", &[2])]);
        let domains = csp.ac3(None, None).unwrap();
        assert_eq!(domains.get(&0).unwrap(), &ordset![1, 3]);
        assert_eq!(domains.get(&1).unwrap(), &ordset![2]);
    }

    #[test]
    fn ac3_leaves_supported_values_alone() {
        // Pairwise revision only removes a value when the peer's domain is
        // exactly that value, so nothing can be pruned here.
        let csp = all_different_over(&[("x1", &[1, 2, 3]), ("x2", &[2, 3])]);
        let domains = csp.ac3(None, None).unwrap();
        assert_eq!(domains.get(&0).unwrap(), &ordset![1, 2, 3]);
        assert_eq!(domains.get(&1).unwrap(), &ordset![2, 3]);
    }

    #[test]
    fn ac3_signals_global_inconsistency() {
        let csp = all_different_over(&[("x1", &[5]), ("x2", &[5])]);
        assert_eq!(csp.ac3(None, None), None);
    }

    #[test]
    fn ac3_folds_the_partial_assignment_into_revision() {
        let csp = all_different_over(&[("x0", &[1]), ("x1", &[1, 2]), ("x2", &[2])]);
        let assignment: Assignment = [(0, 1)].into_iter().collect();
        let domains = csp.initial_domains();

        // With x0 already bound to 1, x1 loses 1 to the assignment and 2 to
        // its arc against x2, leaving nothing.
        assert_eq!(csp.ac3(Some(&assignment), Some(&domains)), None);
    }

    #[test]
    fn ac3_never_removes_values_of_an_actual_solution() {
        let csp = all_different_over(&[("x1", &[1, 2]), ("x2", &[1, 2]), ("x3", &[3])]);
        let domains = csp.ac3(None, None).unwrap();

        // {x1: 1, x2: 2, x3: 3} and {x1: 2, x2: 1, x3: 3} are both
        // solutions; every one of their values must survive the pass.
        for (var, value) in [(0, 1), (0, 2), (1, 1), (1, 2), (2, 3)] {
            assert!(domains.get(&var).unwrap().contains(&value));
        }
    }

    #[test]
    fn forward_check_prunes_exactly_the_conflicting_value() {
        let csp = all_different_over(&[("x1", &[1, 2, 3]), ("x2", &[1, 2, 3])]);
        let domains = csp.initial_domains();
        let assignment: Assignment = [(0, 1)].into_iter().collect();

        let pruned = csp.forward_check(0, &assignment, &domains).unwrap();
        assert_eq!(pruned.get(&1).unwrap(), &ordset![2, 3]);

        // The caller's snapshot is untouched.
        assert_eq!(domains.get(&1).unwrap(), &ordset![1, 2, 3]);
    }

    #[test]
    fn forward_check_fails_when_a_neighbour_is_emptied() {
        let csp = all_different_over(&[("x1", &[1]), ("x2", &[1])]);
        let domains = csp.initial_domains();
        let assignment: Assignment = [(0, 1)].into_iter().collect();

        assert_eq!(csp.forward_check(0, &assignment, &domains), None);
    }

    #[test]
    fn forward_check_carries_untouched_variables_unchanged() {
        let variables = vec![
            Variable::new("x1", [1, 2]),
            Variable::new("x2", [1, 2]),
            Variable::new("far", [7, 8, 9]),
        ];
        let constraints: Vec<Box<dyn Constraint>> =
            vec![Box::new(AllDifferentConstraint::new(vec![0, 1]))];
        let csp = Csp::new(variables, constraints).unwrap();

        let domains = csp.initial_domains();
        let assignment: Assignment = [(0, 1)].into_iter().collect();
        let pruned = csp.forward_check(0, &assignment, &domains).unwrap();

        assert_eq!(pruned.get(&2).unwrap(), &ordset![7, 8, 9]);
    }
}
