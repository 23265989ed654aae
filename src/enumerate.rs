use crate::ast::*;
use itertools::{iproduct, Itertools};

/// Every subset of `pool`, smallest first; subsets of equal size follow
/// pool order.
pub fn powerset<T: Clone>(pool: &[T]) -> Vec<Vec<T>> {
    pool.iter().cloned().powerset().collect()
}

/// Candidate statements for each slot of a `br` statement.
///
/// Every slot except `el` contributes each of its subsets; `el` contributes
/// either nothing or exactly one of its clauses.
#[derive(Debug, Clone, Default)]
pub struct BrPools {
    pub pre: Vec<Statement>,
    pub cond: Vec<Statement>,
    pub body: Vec<Statement>,
    pub elbr: Vec<ElbrClause>,
    pub el: Vec<ElClause>,
    pub post: Vec<Statement>,
}

impl BrPools {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pre<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Statement>,
    {
        self.pre = seq(items);
        self
    }

    pub fn with_cond<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Statement>,
    {
        self.cond = seq(items);
        self
    }

    pub fn with_body<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Statement>,
    {
        self.body = seq(items);
        self
    }

    pub fn with_elbr(mut self, clauses: impl IntoIterator<Item = ElbrClause>) -> Self {
        self.elbr = clauses.into_iter().collect();
        self
    }

    pub fn with_el(mut self, clauses: impl IntoIterator<Item = ElClause>) -> Self {
        self.el = clauses.into_iter().collect();
        self
    }

    pub fn with_post<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Statement>,
    {
        self.post = seq(items);
        self
    }

    /// Number of raw candidates `br_candidates` yields for these pools.
    pub fn candidate_count(&self) -> usize {
        let subsets = |n: usize| 1usize << n;
        subsets(self.pre.len())
            * subsets(self.cond.len())
            * subsets(self.body.len())
            * subsets(self.elbr.len())
            * (1 + self.el.len())
            * subsets(self.post.len())
    }
}

/// Every syntactic `br` variant the pools allow, valid or not.
///
/// Ordered as the product `pre × cond × body × elbr × el × post`, with the
/// last slot varying fastest.
pub fn br_candidates(pools: &BrPools) -> impl Iterator<Item = BrStmt> {
    let el_options: Vec<Option<ElClause>> = std::iter::once(None)
        .chain(pools.el.iter().cloned().map(Some))
        .collect();
    iproduct!(
        powerset(&pools.pre),
        powerset(&pools.cond),
        powerset(&pools.body),
        powerset(&pools.elbr),
        el_options,
        powerset(&pools.post)
    )
    .map(|(pre, cond, body, elbr, el, post)| BrStmt::new(pre, cond, body, elbr, el, post))
}

/// Every valid `br` variant the pools allow that also passes `filter`.
pub fn permute_br<F>(pools: &BrPools, filter: F) -> Vec<BrStmt>
where
    F: Fn(&BrStmt) -> bool,
{
    let mut raw = 0usize;
    let mut valid = 0usize;
    let kept: Vec<BrStmt> = br_candidates(pools)
        .inspect(|_| raw += 1)
        .filter(|br| {
            let ok = br.is_valid();
            if ok {
                valid += 1;
            }
            ok
        })
        .filter(|br| filter(br))
        .collect();
    tracing::debug!(raw, valid, kept = kept.len(), "enumerated br candidates");
    kept
}

/// One `elbr` clause per pair of condition subset and body subset.
pub fn permute_elbr(cond: &[Statement], body: &[Statement]) -> Vec<ElbrClause> {
    iproduct!(powerset(cond), powerset(body))
        .map(|(cond, body)| ElbrClause::new(cond, body))
        .collect()
}

/// One `el` clause per body subset that passes `filter`.
pub fn permute_el<F>(body: &[Statement], filter: F) -> Vec<ElClause>
where
    F: Fn(&ElClause) -> bool,
{
    powerset(body)
        .into_iter()
        .map(ElClause::new)
        .filter(|el| filter(el))
        .collect()
}

/// Filter accepting every candidate.
pub fn keep_all<T>(_: &T) -> bool {
    true
}
