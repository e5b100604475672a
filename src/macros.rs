// Literal constructors in the spirit of `vec!`

#[macro_export]
macro_rules! deque {
    // Elements are added at the rear, so the first one ends up in front
    ($($x: expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut deque = $crate::deque::Deque::new();
            $( deque.add_last($x); )*
            deque
        }
    };
}

#[macro_export]
macro_rules! randomized_queue {
    // `seed = ...` pins the generator
    (seed = $seed: expr; $($x: expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut queue = $crate::randomized_queue::RandomizedQueue::with_random(
                $crate::random::UniformRandom::seeded($seed));
            $( queue.enqueue($x); )*
            queue
        }
    };

    ($($x: expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut queue = $crate::randomized_queue::RandomizedQueue::new();
            $( queue.enqueue($x); )*
            queue
        }
    };
}
