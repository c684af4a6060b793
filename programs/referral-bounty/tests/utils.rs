// Test utilities for the referral bounty program

#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, AnchorSerialize};
use litesvm::LiteSVM;
use referral_bounty::{BountyError, BountyStatus, PerformanceMultipliers, ThresholdEntry, Tier, TierLevel};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const BOUNTY_PROGRAM_ID: Pubkey = Pubkey::new_from_array(referral_bounty::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds
pub const TIER_CONFIG: &[u8] = b"tier_config";
pub const BOUNTY: &[u8] = b"bounty";
pub const REFERRAL: &[u8] = b"referral";
pub const HUNTER: &[u8] = b"hunter";
pub const BOUNTY_HUNTER: &[u8] = b"bounty_hunter";

// Token decimals
pub const DECIMALS: u8 = 6;

// 100 tokens
pub const REWARD_AMOUNT: u64 = 100_000_000;

// REWARD_AMOUNT x 1.02 (success rate) x 1.04 (completed within a day)
pub const FIRST_PAYOUT: u64 = 106_080_000;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

fn encode<T: AnchorSerialize>(data: &mut Vec<u8>, value: &T) {
    value.serialize(data).expect("Borsh encoding should succeed");
}

/// Setup LiteSVM with the bounty program.
///
/// Panics when the SBF binary has not been built (`cargo build-sbf`).
pub fn setup_svm() -> LiteSVM {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/referral_bounty.so");
    let program_bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("{} not built, run `cargo build-sbf` first: {}", path, e));

    let mut svm = LiteSVM::new();
    let _ = svm.add_program(BOUNTY_PROGRAM_ID, &program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn send(svm: &mut LiteSVM, ixs: &[Instruction], payer: &Keypair, signers: &[&Keypair]) -> Result<(), String> {
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx).map(|_| ()).map_err(|e| format!("{:?}", e));
    svm.expire_blockhash();
    result
}

pub fn fetch<T: AccountDeserialize>(svm: &LiteSVM, address: &Pubkey) -> T {
    let account = svm
        .get_account(address)
        .expect("Account should exist");
    T::try_deserialize(&mut account.data.as_slice()).expect("Account should deserialize")
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

// Assert a transaction failed with the given program error
pub fn assert_program_error(result: Result<(), String>, expected: BountyError) {
    let code = u32::from(expected);
    match result {
        Ok(()) => panic!("Expected {:?} ({}), transaction succeeded", expected, code),
        Err(err) => assert!(
            err.contains(&format!("Custom({})", code)),
            "Expected {:?} ({}), got {}",
            expected,
            code,
            err
        ),
    }
}

pub fn same_key(anchor_key: &anchor_lang::prelude::Pubkey, key: &Pubkey) -> bool {
    anchor_key.to_bytes() == key.to_bytes()
}

// ======================== FIXTURES ========================

pub fn tier(level: TierLevel, referrals: u32, rate_bps: u16, multiplier_bps: u16, benefit: &str) -> Tier {
    Tier {
        level,
        required_referrals: referrals,
        required_success_rate_bps: rate_bps,
        reward_multiplier_bps: multiplier_bps,
        benefits: vec![benefit.to_string()],
        description: format!("{} hunters", level.name()),
    }
}

pub fn default_tiers() -> Vec<Tier> {
    vec![
        tier(TierLevel::Bronze, 0, 0, 10_000, "Base rewards"),
        tier(TierLevel::Silver, 5, 5_000, 10_500, "5% reward bonus"),
        tier(TierLevel::Gold, 10, 7_000, 11_000, "10% reward bonus"),
    ]
}

pub fn default_multipliers() -> PerformanceMultipliers {
    PerformanceMultipliers {
        success_rate: vec![ThresholdEntry { threshold: 5_000, multiplier_bps: 10_200 }],
        total_completed: vec![ThresholdEntry { threshold: 10, multiplier_bps: 10_300 }],
        time_to_complete: vec![ThresholdEntry { threshold: 86_400, multiplier_bps: 10_400 }],
    }
}

// ======================== PDAS ========================

pub fn derive_tier_config_pda(admin: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TIER_CONFIG, admin.as_ref()], &BOUNTY_PROGRAM_ID)
}

pub fn derive_bounty_pda(creator: &Pubkey, bounty_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[BOUNTY, creator.as_ref(), &bounty_id.to_le_bytes()],
        &BOUNTY_PROGRAM_ID,
    )
}

pub fn derive_referral_pda(bounty: &Pubkey, referred: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REFERRAL, bounty.as_ref(), referred.as_ref()], &BOUNTY_PROGRAM_ID)
}

pub fn derive_hunter_pda(tier_config: &Pubkey, hunter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[HUNTER, tier_config.as_ref(), hunter.as_ref()], &BOUNTY_PROGRAM_ID)
}

pub fn derive_bounty_hunter_pda(bounty: &Pubkey, hunter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[BOUNTY_HUNTER, bounty.as_ref(), hunter.as_ref()],
        &BOUNTY_PROGRAM_ID,
    )
}

// ======================== INSTRUCTIONS ========================

pub fn build_initialize_config_ix(
    admin: &Pubkey,
    recorder: &Pubkey,
    tiers: &Vec<Tier>,
    multipliers: &PerformanceMultipliers,
) -> Instruction {
    let (tier_config, _) = derive_tier_config_pda(admin);

    let mut data = anchor_discriminator("initialize_config").to_vec();
    data.extend_from_slice(recorder.as_ref());
    encode(&mut data, tiers);
    encode(&mut data, multipliers);

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(tier_config, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_update_hunter_tiers_ix(
    admin: &Pubkey,
    tiers: &Vec<Tier>,
    multipliers: &PerformanceMultipliers,
) -> Instruction {
    let (tier_config, _) = derive_tier_config_pda(admin);

    let mut data = anchor_discriminator("update_hunter_tiers").to_vec();
    encode(&mut data, tiers);
    encode(&mut data, multipliers);

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(tier_config, false),
        ],
        data,
    }
}

pub fn build_set_paused_ix(admin: &Pubkey, paused: bool) -> Instruction {
    let (tier_config, _) = derive_tier_config_pda(admin);

    let mut data = anchor_discriminator("set_paused").to_vec();
    data.push(paused as u8);

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(tier_config, false),
        ],
        data,
    }
}

pub fn build_refresh_hunter_tier_ix(admin: &Pubkey, hunter: &Pubkey) -> Instruction {
    let (tier_config, _) = derive_tier_config_pda(admin);
    let (hunter_profile, _) = derive_hunter_pda(&tier_config, hunter);

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(tier_config, false),
            AccountMeta::new(hunter_profile, false),
        ],
        data: anchor_discriminator("refresh_hunter_tier").to_vec(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn build_create_bounty_ix(
    creator: &Pubkey,
    admin: &Pubkey,
    token_mint: &Pubkey,
    bounty_id: u64,
    name: &str,
    reward_amount: u64,
    total_budget: u64,
    duration_seconds: i64,
    eligible_nfts: &[Pubkey],
) -> Instruction {
    let (tier_config, _) = derive_tier_config_pda(admin);
    let (bounty, _) = derive_bounty_pda(creator, bounty_id);
    let creator_token_account = get_associated_token_address(creator, token_mint);
    let vault = get_associated_token_address(&bounty, token_mint);

    let description = "Refer a buyer of a LedgerFund membership NFT";

    let mut data = anchor_discriminator("create_bounty").to_vec();
    data.extend_from_slice(&bounty_id.to_le_bytes());
    // Borsh serialization: len (4 bytes) + string bytes
    data.extend_from_slice(&(name.len() as u32).to_le_bytes());
    data.extend_from_slice(name.as_bytes());
    data.extend_from_slice(&(description.len() as u32).to_le_bytes());
    data.extend_from_slice(description.as_bytes());
    data.extend_from_slice(&reward_amount.to_le_bytes());
    data.extend_from_slice(&total_budget.to_le_bytes());
    data.extend_from_slice(&duration_seconds.to_le_bytes());
    data.extend_from_slice(&(eligible_nfts.len() as u32).to_le_bytes());
    for nft in eligible_nfts {
        data.extend_from_slice(nft.as_ref());
    }

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*creator, true),
            AccountMeta::new_readonly(tier_config, false),
            AccountMeta::new(bounty, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new(creator_token_account, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_deploy_bounty_ix(
    creator: &Pubkey,
    bounty_id: u64,
    party_address: &Pubkey,
    crowdfund_address: &Pubkey,
) -> Instruction {
    let (bounty, _) = derive_bounty_pda(creator, bounty_id);

    let mut data = anchor_discriminator("deploy_bounty").to_vec();
    data.extend_from_slice(party_address.as_ref());
    data.extend_from_slice(crowdfund_address.as_ref());

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*creator, true),
            AccountMeta::new(bounty, false),
        ],
        data,
    }
}

pub fn build_set_bounty_status_ix(creator: &Pubkey, bounty_id: u64, status: BountyStatus) -> Instruction {
    let (bounty, _) = derive_bounty_pda(creator, bounty_id);

    let mut data = anchor_discriminator("set_bounty_status").to_vec();
    encode(&mut data, &status);

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*creator, true),
            AccountMeta::new(bounty, false),
        ],
        data,
    }
}

pub fn build_expire_bounty_ix(caller: &Pubkey, creator: &Pubkey, bounty_id: u64) -> Instruction {
    let (bounty, _) = derive_bounty_pda(creator, bounty_id);

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*caller, true),
            AccountMeta::new(bounty, false),
        ],
        data: anchor_discriminator("expire_bounty").to_vec(),
    }
}

pub fn build_register_referral_ix(
    referrer: &Pubkey,
    referred: &Pubkey,
    admin: &Pubkey,
    creator: &Pubkey,
    bounty_id: u64,
) -> Instruction {
    let (tier_config, _) = derive_tier_config_pda(admin);
    let (bounty, _) = derive_bounty_pda(creator, bounty_id);
    let (referral, _) = derive_referral_pda(&bounty, referred);
    let (hunter_profile, _) = derive_hunter_pda(&tier_config, referrer);
    let (bounty_hunter, _) = derive_bounty_hunter_pda(&bounty, referrer);

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*referrer, true),
            AccountMeta::new_readonly(*referred, false),
            AccountMeta::new_readonly(tier_config, false),
            AccountMeta::new(bounty, false),
            AccountMeta::new(referral, false),
            AccountMeta::new(hunter_profile, false),
            AccountMeta::new(bounty_hunter, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("register_referral").to_vec(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn build_record_purchase_ix(
    recorder: &Pubkey,
    admin: &Pubkey,
    creator: &Pubkey,
    bounty_id: u64,
    referrer: &Pubkey,
    referred: &Pubkey,
    nft_collection: &Pubkey,
) -> Instruction {
    let (tier_config, _) = derive_tier_config_pda(admin);
    let (bounty, _) = derive_bounty_pda(creator, bounty_id);
    let (referral, _) = derive_referral_pda(&bounty, referred);
    let (hunter_profile, _) = derive_hunter_pda(&tier_config, referrer);

    let mut data = anchor_discriminator("record_purchase").to_vec();
    data.extend_from_slice(nft_collection.as_ref());

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*recorder, true),
            AccountMeta::new_readonly(tier_config, false),
            AccountMeta::new(bounty, false),
            AccountMeta::new(referral, false),
            AccountMeta::new(hunter_profile, false),
        ],
        data,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn build_process_payment_ix(
    recorder: &Pubkey,
    admin: &Pubkey,
    creator: &Pubkey,
    bounty_id: u64,
    token_mint: &Pubkey,
    referrer: &Pubkey,
    referred: &Pubkey,
) -> Instruction {
    let (tier_config, _) = derive_tier_config_pda(admin);
    let (bounty, _) = derive_bounty_pda(creator, bounty_id);
    let (referral, _) = derive_referral_pda(&bounty, referred);
    let (hunter_profile, _) = derive_hunter_pda(&tier_config, referrer);
    let vault = get_associated_token_address(&bounty, token_mint);
    let referrer_token_account = get_associated_token_address(referrer, token_mint);

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*recorder, true),
            AccountMeta::new_readonly(tier_config, false),
            AccountMeta::new(bounty, false),
            AccountMeta::new(referral, false),
            AccountMeta::new(hunter_profile, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(*referrer, false),
            AccountMeta::new(referrer_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("process_payment").to_vec(),
    }
}

pub fn build_reclaim_budget_ix(creator: &Pubkey, bounty_id: u64, token_mint: &Pubkey) -> Instruction {
    let (bounty, _) = derive_bounty_pda(creator, bounty_id);
    let vault = get_associated_token_address(&bounty, token_mint);
    let creator_token_account = get_associated_token_address(creator, token_mint);

    Instruction {
        program_id: BOUNTY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*creator, true),
            AccountMeta::new(bounty, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(creator_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: anchor_discriminator("reclaim_budget").to_vec(),
    }
}
