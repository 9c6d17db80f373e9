pub mod mock_sender;
pub mod smtp_sender;
