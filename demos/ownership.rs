use dyn_array::DynamicArray;
use std::thread;

fn main() {
    println!("--- Cross-thread Ownership Transfer Example ---");
    let mut arr = DynamicArray::new();
    for i in 0..10 {
        arr.push_back(i);
    }

    println!("Original array (thread main): {arr:?}");

    let handle = thread::spawn(move || {
        arr.push_back(100);
        arr
    });

    match handle.join() {
        Ok(arr) => println!("Array back in main thread: {arr:?}"),
        Err(_) => eprintln!("worker thread panicked"),
    }
}
