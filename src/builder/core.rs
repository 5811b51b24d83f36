use crate::builder::config::InductionConfig;
use crate::errors::InfoTreeError;
use crate::metrics::{attribute_information_with, class_entropy_with, AttributeInfo};
use crate::table::Table;
use crate::tree::Tree;
use log::{debug, info, warn};
use rayon::prelude::*;
use rayon::ThreadPool;

/// Induces a classification [`Tree`] from a categorical [`Table`].
///
/// Gain at every depth is measured against the class entropy of the table
/// given to [`TreeBuilder::fit`], not against the entropy of the subset
/// being split. A subset is therefore only split further when one of its
/// attributes leaves less expected information than the whole table had.
#[derive(Clone, Debug, Default)]
pub struct TreeBuilder {
    pub cfg: InductionConfig,
}

/// The attribute chosen to split a table.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitCandidate<'a> {
    /// Column index in the table that was split.
    pub col: usize,
    /// Header of that column.
    pub header: &'a str,
    /// Root entropy minus the expected information of the column.
    pub gain: f64,
    /// Values of the column in first-seen order, one branch each.
    pub values: Vec<&'a str>,
}

impl TreeBuilder {
    /// Tree builder object
    ///
    /// * `cfg` - Entropy formula and parallelism settings.
    pub fn new(cfg: InductionConfig) -> Self {
        TreeBuilder { cfg }
    }

    /// Grow a tree from `table`.
    ///
    /// The returned root is named `root` with an empty value. If the table
    /// is already pure, or no attribute has a positive gain, the root has
    /// no children.
    pub fn fit(&self, table: &Table) -> Result<Tree, InfoTreeError> {
        self.cfg.validate()?;
        let root_entropy = class_entropy_with(table, self.cfg.entropy)?;
        info!(
            "Growing a tree on {0} rows and {1} attributes, root entropy {2:.4}.",
            table.size(),
            table.class_index(),
            root_entropy
        );

        let pool = self.thread_pool()?;
        let mut root = Tree::default();
        self.grow(table, root_entropy, &mut root, pool.as_ref())?;

        info!(
            "Finished growing a tree with {0} nodes, {1} leaves and depth {2}.",
            root.n_nodes(),
            root.n_leaves(),
            root.depth()
        );
        Ok(root)
    }

    /// Split `table` and append one branch per value of the chosen
    /// attribute to `node`.
    ///
    /// * `table` - Rows reaching `node`.
    /// * `root_entropy` - Class entropy of the table the whole tree is grown on.
    /// * `node` - Node receiving the branches, left untouched when no
    ///   attribute has a positive gain.
    pub fn build(&self, table: &Table, root_entropy: f64, node: &mut Tree) -> Result<(), InfoTreeError> {
        self.cfg.validate()?;
        let pool = self.thread_pool()?;
        self.grow(table, root_entropy, node, pool.as_ref())
    }

    /// Attribute with the strictly greatest gain over `root_entropy`.
    ///
    /// Equal gains keep the lowest column index. Returns `None` when no
    /// attribute has a gain above zero.
    pub fn best_split<'a>(&self, table: &'a Table, root_entropy: f64) -> Result<Option<SplitCandidate<'a>>, InfoTreeError> {
        self.cfg.validate()?;
        let pool = self.thread_pool()?;
        self.select_split(table, root_entropy, pool.as_ref())
    }

    fn grow(&self, table: &Table, root_entropy: f64, node: &mut Tree, pool: Option<&ThreadPool>) -> Result<(), InfoTreeError> {
        let split = match self.select_split(table, root_entropy, pool)? {
            Some(split) => split,
            None => {
                if table.class_counts().len() > 1 {
                    warn!(
                        "No attribute of {0} rows has a positive gain, leaving {1} = {2} without children.",
                        table.size(),
                        node.name(),
                        node.value()
                    );
                }
                return Ok(());
            }
        };

        debug!(
            "Splitting {0} rows on {1} with gain {2:.4} into {3} branches.",
            table.size(),
            split.header,
            split.gain,
            split.values.len()
        );

        for value in split.values.iter() {
            let mut branch = Tree::branch_at(split.header, split.col, value);
            let subset = table.partition(split.col, value)?;
            let local_entropy = class_entropy_with(&subset, self.cfg.entropy)?;
            if local_entropy == 0.0 {
                let class_value = subset.class_value(0).ok_or(InfoTreeError::DegenerateDataset)?;
                branch.add_child(Tree::leaf(subset.class_header(), class_value));
            } else {
                self.grow(&subset, root_entropy, &mut branch, pool)?;
            }
            node.add_child(branch);
        }
        Ok(())
    }

    fn select_split<'a>(
        &self,
        table: &'a Table,
        root_entropy: f64,
        pool: Option<&ThreadPool>,
    ) -> Result<Option<SplitCandidate<'a>>, InfoTreeError> {
        let mut best: Option<SplitCandidate<'a>> = None;
        let mut best_gain = 0.0;
        for (col, attr) in self.evaluate(table, pool)?.into_iter().enumerate() {
            let gain = root_entropy - attr.expected_info;
            if gain > best_gain {
                best_gain = gain;
                best = Some(SplitCandidate {
                    col,
                    header: &table.headers()[col],
                    gain,
                    values: attr.values,
                });
            }
        }
        Ok(best)
    }

    /// Expected information of every attribute column, in column order.
    fn evaluate<'a>(&self, table: &'a Table, pool: Option<&ThreadPool>) -> Result<Vec<AttributeInfo<'a>>, InfoTreeError> {
        let entropy = self.cfg.entropy;
        let cols = 0..table.class_index();
        match pool {
            Some(pool) => pool.install(|| {
                cols.into_par_iter()
                    .map(|col| attribute_information_with(table, col, entropy))
                    .collect()
            }),
            None => cols.map(|col| attribute_information_with(table, col, entropy)).collect(),
        }
    }

    fn thread_pool(&self) -> Result<Option<ThreadPool>, InfoTreeError> {
        if !self.cfg.parallel {
            return Ok(None);
        }
        let num_threads = match self.cfg.num_threads {
            Some(num_threads) => num_threads,
            None => std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
        };
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map(Some)
            .map_err(|e| InfoTreeError::ThreadPool(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{class_entropy, EntropyMethod};
    use crate::reader::read_csv;
    use crate::tree::rules;
    use crate::utils::precision_round;
    use std::error::Error;

    #[test]
    fn test_weather_first_split_is_outlook() -> Result<(), Box<dyn Error>> {
        let table = read_csv("resources/weather.csv")?;
        let root_entropy = class_entropy(&table)?;
        assert_eq!(precision_round(root_entropy, 3), 0.94);

        let split = TreeBuilder::default().best_split(&table, root_entropy)?.unwrap();
        assert_eq!(split.col, 0);
        assert_eq!(split.header, "outlook");
        assert_eq!(split.values, vec!["Sunny", "Overcast", "Rain"]);
        assert!((split.gain - 0.246).abs() < 1e-3);
        Ok(())
    }

    #[test]
    fn test_weather_tree() -> Result<(), Box<dyn Error>> {
        let table = read_csv("resources/weather.csv")?;
        let tree = TreeBuilder::default().fit(&table)?;

        assert_eq!(tree.name(), "root");
        let branches: Vec<(&str, &str)> = tree.children().iter().map(|c| (c.name(), c.value())).collect();
        assert_eq!(
            branches,
            vec![("outlook", "Sunny"), ("outlook", "Overcast"), ("outlook", "Rain")]
        );

        let overcast = &tree.children()[1];
        assert_eq!(overcast.children().len(), 1);
        assert!(overcast.children()[0].is_class_leaf("play"));
        assert_eq!(overcast.children()[0].value(), "Yes");

        assert_eq!(
            rules(&tree, table.class_header()),
            vec![
                "IF outlook IS Sunny AND humidity IS High THAN play No",
                "IF outlook IS Sunny AND humidity IS Normal THAN play Yes",
                "IF outlook IS Overcast THAN play Yes",
                "IF outlook IS Rain AND wind IS Weak THAN play Yes",
                "IF outlook IS Rain AND wind IS Strong THAN play No",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_weather_tree_classifies_training_rows() -> Result<(), Box<dyn Error>> {
        let table = read_csv("resources/weather.csv")?;
        let tree = TreeBuilder::default().fit(&table)?;
        for row in table.rows() {
            assert_eq!(tree.classify(table.headers(), row), Some(row[table.class_index()].as_str()));
        }
        Ok(())
    }

    #[test]
    fn test_parallel_matches_sequential() -> Result<(), Box<dyn Error>> {
        let table = read_csv("resources/weather.csv")?;
        let sequential = TreeBuilder::default().fit(&table)?;
        let parallel = TreeBuilder::default()
            .set_parallel(true)
            .set_num_threads(Some(2))
            .fit(&table)?;
        assert_eq!(sequential, parallel);
        Ok(())
    }

    #[test]
    fn test_pure_table_gives_pure_root() {
        let table = Table::from_strs(
            &["a", "b", "class"],
            &[&["x", "p", "Yes"], &["y", "q", "Yes"], &["y", "p", "Yes"]],
        )
        .unwrap();
        let tree = TreeBuilder::default().fit(&table).unwrap();
        assert!(tree.is_pure());
    }

    #[test]
    fn test_tie_keeps_lowest_column() {
        // `a` and `b` carry the same information, `c` is useless.
        let table = Table::from_strs(
            &["c", "a", "b", "class"],
            &[
                &["k", "x", "p", "Yes"],
                &["k", "y", "q", "No"],
                &["k", "x", "p", "Yes"],
                &["k", "y", "q", "No"],
            ],
        )
        .unwrap();
        let builder = TreeBuilder::default();
        let root_entropy = class_entropy(&table).unwrap();
        let split = builder.best_split(&table, root_entropy).unwrap().unwrap();
        assert_eq!(split.col, 1);
        assert_eq!(split.header, "a");

        let tree = builder.set_parallel(true).fit(&table).unwrap();
        assert!(tree.children().iter().all(|c| c.name() == "a"));
    }

    #[test]
    fn test_gain_is_measured_against_root_entropy() {
        // Root: 7 Yes / 3 No, entropy 0.881. The `a = x` subset is 3/3 with
        // entropy 1.0 and `b` would lower it to 0.918, which is still above
        // the root entropy, so that branch is not split.
        let table = Table::from_strs(
            &["a", "b", "class"],
            &[
                &["x", "p", "Yes"],
                &["x", "p", "Yes"],
                &["x", "p", "No"],
                &["x", "q", "Yes"],
                &["x", "q", "No"],
                &["x", "q", "No"],
                &["y", "p", "Yes"],
                &["y", "p", "Yes"],
                &["y", "p", "Yes"],
                &["y", "p", "Yes"],
            ],
        )
        .unwrap();
        let tree = TreeBuilder::default().fit(&table).unwrap();
        assert_eq!(tree.children().len(), 2);

        let x = &tree.children()[0];
        assert_eq!((x.name(), x.value()), ("a", "x"));
        assert!(x.is_pure());

        let y = &tree.children()[1];
        assert_eq!(y.children().len(), 1);
        assert!(y.children()[0].is_class_leaf("class"));
        assert_eq!(y.children()[0].value(), "Yes");
    }

    #[test]
    fn test_every_attribute_is_consumed() -> Result<(), Box<dyn Error>> {
        // Root 3 Yes / 4 No. `c` splits first, `a` splits `c = m` and `b`
        // splits `a = x`, every gain measured against the root entropy.
        let table = Table::from_strs(
            &["c", "a", "b", "class"],
            &[
                &["m", "x", "p", "Yes"],
                &["m", "x", "q", "No"],
                &["m", "y", "p", "No"],
                &["m", "y", "p", "No"],
                &["m", "y", "q", "No"],
                &["n", "y", "p", "Yes"],
                &["n", "y", "p", "Yes"],
            ],
        )?;
        let tree = TreeBuilder::default().fit(&table)?;
        // One branch level per attribute, plus the class leaf.
        assert_eq!(tree.depth(), table.width());
        assert_eq!(
            rules(&tree, table.class_header()),
            vec![
                "IF c IS m AND a IS x AND b IS p THAN class Yes",
                "IF c IS m AND a IS x AND b IS q THAN class No",
                "IF c IS m AND a IS y THAN class No",
                "IF c IS n THAN class Yes",
            ]
        );
        for row in table.rows() {
            assert_eq!(tree.classify(table.headers(), row), Some(row[table.class_index()].as_str()));
        }
        Ok(())
    }

    #[test]
    fn test_classify_with_duplicate_headers() -> Result<(), Box<dyn Error>> {
        let table = Table::from_strs(&["a", "a", "class"], &[&["k", "x", "Yes"], &["k", "y", "No"]])?;
        let tree = TreeBuilder::default().fit(&table)?;
        assert_eq!(tree.children()[0].column(), Some(1));
        for row in table.rows() {
            assert_eq!(tree.classify(table.headers(), row), Some(row[table.class_index()].as_str()));
        }
        assert_eq!(tree.classify(table.headers(), &["x", "k", "Yes"]), None);
        Ok(())
    }

    #[test]
    fn test_weather_depth_is_bounded_by_width() -> Result<(), Box<dyn Error>> {
        let table = read_csv("resources/weather.csv")?;
        let tree = TreeBuilder::default().fit(&table)?;
        assert_eq!(tree.depth(), 3);
        assert!(tree.depth() <= table.width());
        Ok(())
    }

    #[test]
    fn test_only_class_column() {
        let table = Table::from_strs(&["class"], &[&["Yes"], &["No"]]).unwrap();
        let tree = TreeBuilder::default().fit(&table).unwrap();
        assert!(tree.is_pure());
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let table = Table::from_strs(&["a", "class"], &[]).unwrap();
        assert!(matches!(
            TreeBuilder::default().fit(&table),
            Err(InfoTreeError::DegenerateDataset)
        ));
    }

    #[test]
    fn test_three_classes() {
        let table = Table::from_strs(
            &["a", "class"],
            &[&["x", "A"], &["y", "B"], &["z", "C"], &["x", "A"]],
        )
        .unwrap();
        assert!(matches!(
            TreeBuilder::default().fit(&table),
            Err(InfoTreeError::UnsupportedClassCardinality(3))
        ));

        let tree = TreeBuilder::default().set_entropy(EntropyMethod::Shannon).fit(&table).unwrap();
        assert_eq!(rules(&tree, "class"), vec![
            "IF a IS x THAN class A",
            "IF a IS y THAN class B",
            "IF a IS z THAN class C",
        ]);
    }

    #[test]
    fn test_build_appends_to_given_node() {
        let table = Table::from_strs(&["a", "class"], &[&["x", "Yes"], &["y", "No"]]).unwrap();
        let mut node = Tree::new("start");
        TreeBuilder::default().build(&table, 1.0, &mut node).unwrap();
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[0].children()[0].value(), "Yes");
        assert_eq!(node.children()[1].children()[0].value(), "No");
    }

    #[test]
    fn test_invalid_thread_count() {
        let table = Table::from_strs(&["a", "class"], &[&["x", "Yes"]]).unwrap();
        let res = TreeBuilder::default().set_parallel(true).set_num_threads(Some(0)).fit(&table);
        assert!(matches!(res, Err(InfoTreeError::InvalidParameter(..))));
    }
}
