use dyn_array::DynamicArray;

fn main() {
    println!("--- Basic Usage Example ---");
    let mut arr = DynamicArray::new();

    for i in 1..=5 {
        arr.push_back(i * 10);
        println!("Pushed: {}, len: {}, cap: {}", i * 10, arr.len(), arr.capacity());
    }
    println!("Buffer: {arr}");

    arr.push_front(0);
    arr.insert(arr.begin() + 3, 25);
    println!("After push_front(0) and insert(begin+3, 25): {arr}");

    let mut it = arr.begin();
    while it != arr.end() {
        print!("{} ", arr[it]);
        it.advance();
    }
    println!();

    while !arr.is_empty() {
        let last = *arr.back();
        arr.pop_back();
        println!("Popped: {last}, len: {}", arr.len());
    }
    println!("Emptied buffer still holds stale slots: {arr}");
}
