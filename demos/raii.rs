use dyn_array::DynamicArray;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct Tracked(Option<(usize, Arc<AtomicUsize>)>);

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some((id, count)) = &self.0 {
            println!("Dropping element {id}");
            count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn main() {
    println!("--- RAII Example ---");
    let drop_count = Arc::new(AtomicUsize::new(0));

    {
        let mut arr = DynamicArray::new();
        for i in 0..3 {
            arr.push_back(Tracked(Some((i, drop_count.clone()))));
        }
        println!("Array created with 3 elements.");
        arr.pop_back();
        println!(
            "After pop_back: len {}, dropped so far {}",
            arr.len(),
            drop_count.load(Ordering::SeqCst)
        );
        // Scope ends here; the buffer and every slot in it are released.
    }

    println!("Total elements dropped: {}", drop_count.load(Ordering::SeqCst));
    assert_eq!(drop_count.load(Ordering::SeqCst), 3);
}
