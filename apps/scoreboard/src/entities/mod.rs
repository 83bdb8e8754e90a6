pub mod rounds;
pub mod teams;

pub use rounds::Entity as Rounds;
pub use rounds::Model as RoundResult;
pub use teams::Entity as Teams;
pub use teams::Model as Team;
