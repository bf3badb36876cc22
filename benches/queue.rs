use criterion::{criterion_group, criterion_main, Criterion};

const ITEMS: usize = 1000;

fn queue_push_pop(c: &mut Criterion) {
    c.bench_function("queue-linear-list", |b| {
        b.iter(run::<list_queue::ListQueue<usize>>)
    });
    c.bench_function("queue-vec-deque", |b| {
        b.iter(run::<deque_queue::DequeQueue<usize>>)
    });
}

trait Queue<T> {
    fn new() -> Self;
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
}

fn run<T>()
where
    T: Queue<usize>,
{
    let mut queue = T::new();
    for i in 0..ITEMS {
        queue.push(i);
        assert!(queue.pop().is_some());
    }
    for i in 0..ITEMS {
        queue.push(i);
    }
    for _i in 0..ITEMS {
        assert!(queue.pop().is_some());
    }
    assert!(queue.pop().is_none());
    assert!(queue.is_empty());
}

criterion_group!(benches, queue_push_pop);
criterion_main!(benches);

mod list_queue {
    use super::Queue;

    pub struct ListQueue<T> {
        queue: linear_list::Queue<T>,
    }

    impl<T: Copy> Queue<T> for ListQueue<T> {
        fn new() -> ListQueue<T> {
            ListQueue {
                queue: linear_list::Queue::new(),
            }
        }

        fn push(&mut self, value: T) {
            self.queue.push(value);
        }

        fn pop(&mut self) -> Option<T> {
            self.queue.pop().map(|entry| *entry)
        }

        fn is_empty(&self) -> bool {
            self.queue.is_empty()
        }
    }
}

mod deque_queue {
    use std::collections::VecDeque;

    use super::Queue;

    pub struct DequeQueue<T> {
        queue: VecDeque<T>,
    }

    impl<T: Copy> Queue<T> for DequeQueue<T> {
        fn new() -> DequeQueue<T> {
            DequeQueue {
                queue: VecDeque::new(),
            }
        }

        fn push(&mut self, value: T) {
            self.queue.push_back(value);
        }

        fn pop(&mut self) -> Option<T> {
            self.queue.pop_front()
        }

        fn is_empty(&self) -> bool {
            self.queue.is_empty()
        }
    }
}
