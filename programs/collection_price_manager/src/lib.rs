use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

// maximum number of items a single collection can price
pub const MAX_PRICES: usize = 100;

pub const PRICES_SEED: &[u8] = b"prices";
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

declare_id!("FV2936jpAPgHkguQeefLpMJm6hJdcmHLy2pDCNTb13Xv");

// helper: length rules shared by initialize and update
fn checked_size(prices: &[u64]) -> Result<u16> {
    require!(!prices.is_empty(), PriceError::EmptyPriceList);
    require!(prices.len() <= MAX_PRICES, PriceError::TooManyPrices);
    u16::try_from(prices.len()).map_err(|_| error!(PriceError::TooManyPrices))
}

/// Price list PDA for a collection, as derived by the program.
pub fn collection_prices_address(collection: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PRICES_SEED, collection.as_ref()], &ID)
}

/// Mint authority PDA for a collection.
pub fn mint_authority_address(collection: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED, collection.as_ref()], &ID)
}

#[program]
pub mod collection_price_manager {
    use super::*;

    /// Creates the price list PDA for a collection.
    /// - The signer becomes the collection owner and is the only key allowed to
    ///   change prices or the merkle tree afterwards.
    /// - The mint authority PDA is not created here; only its bump is recorded.
    /// - Parameters:
    ///    - size: number of items in the collection, must equal prices.len()
    ///    - prices: per-item prices in the payment mint's smallest unit
    pub fn initialize_collection(
        ctx: Context<InitializeCollection>,
        size: u16,
        prices: Vec<u64>,
    ) -> Result<()> {
        let n = checked_size(&prices)?;
        require_eq!(n, size, PriceError::SizeMismatch);

        let price_data = &mut ctx.accounts.collection_prices;
        price_data.owner = ctx.accounts.owner.key();
        price_data.collection = ctx.accounts.collection_address.key();
        price_data.payment_mint = ctx.accounts.payment_mint.key();
        price_data.merkle_tree = Pubkey::default();
        price_data.size = size;
        price_data.prices = prices;
        price_data.bump = ctx.bumps.collection_prices;
        price_data.mint_authority_bump = ctx.bumps.mint_authority;

        msg!(
            "initialize_collection: collection={} owner={} payment_mint={} size={}",
            price_data.collection,
            price_data.owner,
            price_data.payment_mint,
            size
        );
        Ok(())
    }

    /// Replaces the whole price list (only collection owner can modify).
    pub fn update_prices(ctx: Context<UpdatePrices>, new_prices: Vec<u64>) -> Result<()> {
        let size = checked_size(&new_prices)?;

        let price_data = &mut ctx.accounts.collection_prices;
        msg!("update_prices: collection={} size {} -> {}", price_data.collection, price_data.size, size);

        price_data.size = size;
        price_data.prices = new_prices;

        Ok(())
    }

    // Fetch collection size & prices
    pub fn fetch_prices(ctx: Context<FetchPrices>) -> Result<PriceSnapshot> {
        let price_data = &ctx.accounts.collection_prices;
        Ok(PriceSnapshot {
            size: price_data.size,
            payment_mint: price_data.payment_mint,
            prices: price_data.prices.clone(),
        })
    }

    /// Price of a single item, by index into the collection.
    pub fn get_price(ctx: Context<FetchPrices>, index: u16) -> Result<u64> {
        let price_data = &ctx.accounts.collection_prices;
        require!(index < price_data.size, PriceError::PriceIndexOutOfRange);

        let price = price_data
            .prices
            .get(index as usize)
            .copied()
            .ok_or(PriceError::PriceIndexOutOfRange)?;
        msg!("get_price: collection={} index={} price={}", price_data.collection, index, price);
        Ok(price)
    }

    /// Points the collection at the merkle tree new compressed items are minted into.
    /// Overwrites any tree set earlier.
    pub fn set_merkle_tree(ctx: Context<UpdatePrices>, merkle_tree: Pubkey) -> Result<()> {
        require_keys_neq!(merkle_tree, Pubkey::default(), PriceError::InvalidMerkleTree);

        let price_data = &mut ctx.accounts.collection_prices;
        price_data.merkle_tree = merkle_tree;

        msg!("set_merkle_tree: collection={} tree={}", price_data.collection, merkle_tree);
        Ok(())
    }
}

/* ---------------------- ACCOUNTS ---------------------- */

#[derive(Accounts)]
pub struct InitializeCollection<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: only the key is used, as a PDA seed
    pub collection_address: UncheckedAccount<'info>,

    /// Allocated at full size so later updates never realloc
    #[account(
        init,
        payer = owner,
        space = 8 + CollectionPrices::LEN,
        seeds = [PRICES_SEED, collection_address.key().as_ref()],
        bump
    )]
    pub collection_prices: Account<'info, CollectionPrices>,

    /// PDA that will sign compressed mints for the collection
    /// CHECK: PDA derived and verified via seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED, collection_address.key().as_ref()],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// SPL token accepted for payment (e.g. USDC)
    pub payment_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

// Owner-only mutations: update_prices and set_merkle_tree
#[derive(Accounts)]
pub struct UpdatePrices<'info> {
    #[account(
        mut,
        has_one = owner @ PriceError::Unauthorized,
        seeds = [PRICES_SEED, collection_prices.collection.as_ref()],
        bump = collection_prices.bump
    )]
    pub collection_prices: Account<'info, CollectionPrices>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct FetchPrices<'info> {
    #[account(
        seeds = [PRICES_SEED, collection_prices.collection.as_ref()],
        bump = collection_prices.bump
    )]
    pub collection_prices: Account<'info, CollectionPrices>,
}

/* ---------------------- STATE ---------------------- */

#[account]
#[derive(Debug)]
pub struct CollectionPrices {
    pub owner: Pubkey,        // collection owner
    pub collection: Pubkey,   // PDA seed
    pub payment_mint: Pubkey, // SPL token accepted for payment
    pub merkle_tree: Pubkey,  // default until set_merkle_tree
    pub size: u16,            // always prices.len()
    pub prices: Vec<u64>,     // smallest unit of payment_mint (6 decimals for USDC)
    pub bump: u8,
    pub mint_authority_bump: u8,
}

impl CollectionPrices {
    pub const LEN: usize =
        32 + // owner
        32 + // collection
        32 + // payment_mint
        32 + // merkle_tree
        2  + // size
        (4 + 8 * MAX_PRICES) + // prices vec
        1  + // bump
        1;   // mint_authority_bump
}

/// Return data of fetch_prices.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PriceSnapshot {
    pub size: u16,
    pub payment_mint: Pubkey,
    pub prices: Vec<u64>,
}

/* ---------------------- ERRORS ---------------------- */

#[error_code]
pub enum PriceError {
    #[msg("Unauthorized: You are not the collection owner.")]
    Unauthorized,
    #[msg("Size mismatch: Number of prices does not match expected size.")]
    SizeMismatch,
    #[msg("Too many prices for one collection")]
    TooManyPrices,
    #[msg("Price list must not be empty")]
    EmptyPriceList,
    #[msg("Price index is outside the collection")]
    PriceIndexOutOfRange,
    #[msg("Merkle tree must not be the default address")]
    InvalidMerkleTree,
}
