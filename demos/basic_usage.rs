// ============================================================================
// Basic Usage Example
// ============================================================================

use tree_aggregator::prelude::*;

fn family_tree() -> Node {
    Node::new("Grandparent")
        .with_param(ParamId::Age, 78)
        .with_param(ParamId::Salary, 2100)
        .with_child(
            Node::new("Parent A")
                .with_param(ParamId::Age, 51)
                .with_param(ParamId::Salary, 5400.50)
                .with_child(
                    Node::new("Child A1")
                        .with_param(ParamId::Age, 24)
                        .with_param(ParamId::Salary, 3150.25),
                )
                .with_child(
                    Node::new("Child A2")
                        .with_param(ParamId::Age, 19)
                        .with_param(ParamId::Salary, 0),
                ),
        )
        .with_child(
            Node::new("Parent B")
                .with_param(ParamId::Age, 47)
                .with_param(ParamId::Salary, 6200),
        )
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Tree Aggregator Example ===\n");

    let tree = family_tree();
    println!(
        "Tree rooted at {} with {} direct children and {} descendants\n",
        tree.name(),
        tree.child_count(),
        tree.descendant_count()
    );

    let aggregator = match AggregatorBuilder::currency().build() {
        Ok(aggregator) => aggregator,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    for param in [ParamId::Age, ParamId::Salary] {
        println!("{}:", param);
        for function in AggregateFunction::ALL {
            let request = AggregationRequest::new(function, param);
            match aggregator.aggregate(&tree, request) {
                Ok(value) => println!("  {:<8} {}", function, value),
                Err(e) => println!("  {:<8} error: {}", function, e),
            }
        }
        println!();
    }

    // A leaf has no direct children to average over
    let leaf = &tree.children()[1];
    match aggregate(leaf, AggregateFunction::Average, ParamId::Age) {
        Ok(value) => println!("Average at {}: {}", leaf.name(), value),
        Err(e) => println!("Average at {}: {}", leaf.name(), e),
    }

    // Invalid values abort the whole query
    let broken = family_tree().with_child(
        Node::new("Unknown")
            .with_param(ParamId::Age, f64::NAN)
            .with_param(ParamId::Salary, 0),
    );
    match aggregator.aggregate_parallel(&broken, AggregationRequest::max(ParamId::Age)) {
        Ok(value) => println!("Max age: {}", value),
        Err(e) => println!("Max age: {}", e),
    }
}
