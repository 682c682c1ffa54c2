use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use slotree::{ArrayBinaryTree, Position, Side, TreeConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "slotree", about = "Array-backed binary tree walkthroughs")]
struct Cli {
    /// Log at info level, with tree events (growth, relocation, attach) at debug.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay the scripted walkthrough: navigation, replace, delete, attach, errors.
    Demo,
    /// Grow a one-sided chain and report how storage grew.
    Chain {
        /// Number of edges below the root.
        #[arg(long, default_value_t = 5)]
        depth: usize,
        /// Which side every child hangs on.
        #[arg(long, value_enum, default_value_t = ChainSide::Left)]
        side: ChainSide,
        /// Preallocate slots instead of growing on demand.
        #[arg(long, default_value_t = 0)]
        initial_capacity: usize,
        /// Record and print every storage growth.
        #[arg(long)]
        profile: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ChainSide {
    Left,
    Right,
}

impl From<ChainSide> for Side {
    fn from(side: ChainSide) -> Self {
        match side {
            ChainSide::Left => Side::Left,
            ChainSide::Right => Side::Right,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo => run_demo()?,
        Commands::Chain {
            depth,
            side,
            initial_capacity,
            profile,
        } => run_chain(depth, side.into(), initial_capacity, profile)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info,slotree=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo() -> Result<()> {
    let mut tree = ArrayBinaryTree::new();
    println!("is_empty: {}", tree.is_empty());
    println!("len: {}", tree.len());
    println!();

    println!("Add root: A");
    let root = tree.add_root("A").context("failed to add root")?;
    println!("root index: {}", root);
    println!("is_root(root): {}", tree.is_root(root)?);
    println!("len: {}", tree.len());
    println!();

    println!("Add left and right children: B, C");
    let b = tree.add_left(root, "B")?;
    let c = tree.add_right(root, "C")?;
    println!("left index: {}", b);
    println!("right index: {}", c);
    println!("num_children(root): {}", tree.num_children(root)?);
    println!();

    println!("Leaf and sibling checks");
    println!("is_leaf(B): {}", tree.is_leaf(b)?);
    println!("sibling(B): {}", describe(tree.sibling(b)?));
    println!();

    println!("Replace right child with C_New");
    let old = tree.replace(c, "C_New")?;
    println!("replaced {} with {}", old, tree.get(c)?);
    println!();

    println!("Depth and height");
    println!("depth(B): {}", tree.depth(b)?);
    println!("height: {}", tree.height());
    println!();

    println!("Delete with relocation");
    tree.add_left(b, "D")?;
    println!("added left child D to B");
    println!("len before delete: {}", tree.len());
    let removed = tree.delete(b).context("failed to delete B")?;
    println!("removed: {}", removed);
    println!("new value at index 1: {}", tree.get(Position::new(1))?);
    println!("len after delete: {}", tree.len());
    println!();

    println!("Attach");
    let leaf = tree
        .right(root)?
        .context("root should still have a right child")?;
    let mut t1 = ArrayBinaryTree::new();
    let mut t2 = ArrayBinaryTree::new();
    t1.add_root("X")?;
    t2.add_root("Y")?;
    tree.attach(leaf, &t1, &t2)
        .with_context(|| format!("failed to attach at {}", leaf))?;
    println!("attached trees at index: {}", leaf);
    println!("len: {}", tree.len());
    println!("donor sizes: {}, {}", t1.len(), t2.len());
    println!("tree:");
    println!("{}", tree);
    println!();

    println!("Rejected operations");
    if let Err(err) = tree.add_root("Duplicate") {
        println!("add_root: {}", err);
    }
    if let Err(err) = tree.delete(root) {
        println!("delete(root): {}", err);
    }
    if let Err(err) = tree.attach(root, &t1, &t2) {
        println!("attach(root): {}", err);
    }

    Ok(())
}

fn run_chain(depth: usize, side: Side, initial_capacity: usize, profile: bool) -> Result<()> {
    let config = TreeConfig::default()
        .with_initial_capacity(initial_capacity)
        .with_growth_profiling(profile);
    let mut tree = ArrayBinaryTree::with_config(config);

    let mut node = tree.add_root(0usize)?;
    for level in 1..=depth {
        node = tree
            .add_child(node, side, level)
            .with_context(|| format!("failed to extend chain at level {}", level))?;
    }

    println!("nodes: {}", tree.len());
    println!("height: {}", tree.height());
    println!("deepest index: {}", node);
    println!("slots: {}", tree.capacity());
    if let Some(profile) = tree.growth_profile() {
        println!("{}", profile.report());
    }

    Ok(())
}

fn describe(position: Option<Position>) -> String {
    position.map_or_else(|| "None".to_string(), |p| p.to_string())
}
