mod alpha_matrix;
mod node;
mod node_set;
mod order_groups;
mod timestamp;
mod weighted_cliques;

pub use alpha_matrix::AlphaMatrix;
pub use node::NodeId;
pub use node_set::{Clique, NodeSet};
pub use order_groups::OrderGroups;
pub use timestamp::Timestamp;
pub use weighted_cliques::WeightedCliques;
