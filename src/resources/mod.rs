//! Long-lived state stored in the ECS world.
//!
//! The queues and the image store hold `Rc` handles and are therefore
//! non-send resources; insert them with `insert_non_send_resource` and read
//! them through `NonSend`/`NonSendMut` or `World::non_send_resource`.
//!
//! Overview
//! - `clock` – delayed and recurring callbacks
//! - `gameconfig` – settings loaded from an INI file
//! - `imagestore` – image names and their shared sizes
//! - `tweener` – running tweens and their ids
//! - `worldtime` – simulation time, delta and frame count
pub mod clock;
pub mod gameconfig;
pub mod imagestore;
pub mod tweener;
pub mod worldtime;
