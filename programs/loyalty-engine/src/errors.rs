use anchor_lang::prelude::*;

#[error_code]
pub enum LoyaltyError {
    // Expected business rejections. Safe to surface to end users as
    // friendly "try again later" style messages.
    #[msg("Points were already awarded for this action within the window")]
    AlreadyAwarded,
    #[msg("Redemption would exceed the issued quantity")]
    OverRedemption,
    #[msg("Already played within the current period")]
    RateLimited,
    #[msg("Raffle has already been resolved")]
    AlreadyResolved,
    #[msg("Prize has already been claimed")]
    AlreadyClaimed,
    #[msg("This attempt did not win a prize")]
    DidNotWin,

    // Contract violations. These indicate a caller bug upstream, not a
    // runtime condition to recover from.
    #[msg("Points delta must be non-zero")]
    InvalidPointsDelta,
    #[msg("Insufficient points balance")]
    InsufficientPoints,
    #[msg("Description is too long")]
    DescriptionTooLong,
    #[msg("Benefit quantity must be at least one")]
    InvalidQuantity,
    #[msg("Redeem count must be at least one")]
    InvalidRedeemCount,
    #[msg("Benefit has been invalidated")]
    BenefitInvalidated,
    #[msg("Window length must be positive")]
    InvalidWindow,
    #[msg("Prize pool is full")]
    PrizePoolFull,
    #[msg("Prize index out of bounds")]
    PrizeIndexOutOfBounds,
    #[msg("Raffle winner count is out of range")]
    InvalidWinnerCount,
    #[msg("Entry count must be at least one")]
    InvalidEntryCount,
    #[msg("Raffle entry pool is full")]
    TooManyEntries,
    #[msg("Raffle is no longer accepting entries")]
    RaffleNotPending,
    #[msg("Signer is not the configured admin")]
    Unauthorized,
    #[msg("Arithmetic overflow")]
    Overflow,
}
