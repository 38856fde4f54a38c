use anyhow::{Context, Result};
use dyn_array::DynamicArray;
use dyn_array::cli::{Cli, Scenario, parse_values};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(raw) = cli.values.as_deref() {
        let values = parse_values(raw).context("Failed to read --values")?;
        run_values(values);
        return Ok(());
    }

    match cli.scenario {
        Scenario::Basic => run_basic(),
        Scenario::Insert => run_insert(),
        Scenario::Assign => run_assign(),
        Scenario::Reserve => run_reserve(),
        Scenario::All => {
            run_basic();
            run_insert();
            run_assign();
            run_reserve();
        }
    }

    Ok(())
}

fn show<T: std::fmt::Display>(step: &str, arr: &DynamicArray<T>) {
    println!(
        "{step:<28} {arr}  size={} capacity={}",
        arr.len(),
        arr.capacity()
    );
}

fn run_values(values: Vec<i64>) {
    info!(count = values.len(), "building array from --values");
    let mut arr = DynamicArray::from(values);
    show("from values", &arr);
    arr.shrink_to_fit();
    show("shrink_to_fit", &arr);
}

fn run_basic() {
    println!("--- push / insert / erase ---");
    let mut arr = DynamicArray::new();
    for value in 1..=3 {
        arr.push_back(value);
        show(&format!("push_back({value})"), &arr);
    }
    arr.push_front(0);
    show("push_front(0)", &arr);
    arr.insert(arr.begin() + 2, 99);
    show("insert(begin+2, 99)", &arr);
    arr.erase_range(arr.begin(), arr.begin() + 2);
    show("erase(begin, begin+2)", &arr);

    let mut it = arr.begin();
    while it != arr.end() {
        println!("  slot {} -> {}", it.position(), arr[it]);
        it.advance();
    }
}

fn run_insert() {
    println!("--- range insert ---");
    let mut target = DynamicArray::from([1, 2, 3, 4, 5]);
    let source = DynamicArray::from([6, 7, 8, 9, 10]);
    show("target", &target);
    target.insert_iter(target.begin() + 2, source.iter().copied());
    show("insert(begin+2, source)", &target);
    target.insert_slice(target.end(), &[11, 12]);
    show("insert(end, {11, 12})", &target);
    let past_end = target.end() + 1;
    let returned = target.insert_slice(past_end, &[0]);
    show("insert(end+1, {0})", &target);
    println!("  rejected insert returned the same position: {}", returned == past_end);
}

fn run_assign() {
    println!("--- assign ---");
    let mut arr = DynamicArray::from([1, 2, 3, 4, 5]);
    show("list {1, 2, 3, 4, 5}", &arr);
    arr.assign(3, 7);
    show("assign(3, 7)", &arr);
    arr.assign_slice(&[4, 5, 6, 7, 8, 9, 10, 11, 12, 13]);
    show("assign({4..13})", &arr);
}

fn run_reserve() {
    println!("--- reserve / shrink ---");
    let mut arr = DynamicArray::from([1, 2, 3, 4, 5]);
    show("list {1, 2, 3, 4, 5}", &arr);
    arr.reserve(100);
    println!("  reserve(100): size={} capacity={}", arr.len(), arr.capacity());
    arr.reserve(50);
    println!("  reserve(50):  size={} capacity={}", arr.len(), arr.capacity());
    arr.shrink_to_fit();
    show("shrink_to_fit", &arr);
    arr.clear();
    show("clear", &arr);
}
