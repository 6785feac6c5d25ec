use anchor_lang::prelude::{AccountInfo, Pubkey};
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::system_program;
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use audit_ledger::state::{AuditProof, AuditTable};
use solana_program_test::{processor, ProgramTest, ProgramTestContext};
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;

fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    // Anchor's entry wants one lifetime for the slice and its elements
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    audit_ledger::entry(program_id, accounts, data)
}

async fn start() -> ProgramTestContext {
    ProgramTest::new("audit_ledger", audit_ledger::ID, processor!(process_instruction))
        .start_with_context()
        .await
}

async fn send(ctx: &mut ProgramTestContext, ix: Instruction, extra: &[&Keypair]) -> Result<(), String> {
    let mut signers = vec![&ctx.payer];
    signers.extend_from_slice(extra);
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&ctx.payer.pubkey()),
        &signers,
        ctx.last_blockhash,
    );
    ctx.banks_client
        .process_transaction(tx)
        .await
        .map_err(|e| e.to_string())
}

async fn init_table(ctx: &mut ProgramTestContext) -> Pubkey {
    let table = Keypair::new();
    let ix = Instruction {
        program_id: audit_ledger::ID,
        accounts: audit_ledger::accounts::InitTable {
            audit_table: table.pubkey(),
            creator: ctx.payer.pubkey(),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: audit_ledger::instruction::InitTable {}.data(),
    };
    send(ctx, ix, &[&table]).await.expect("init_table");
    table.pubkey()
}

fn anchor_ix(ctx: &ProgramTestContext, table: Pubkey, proof: AuditProof) -> Instruction {
    Instruction {
        program_id: audit_ledger::ID,
        accounts: audit_ledger::accounts::AnchorAudit {
            audit_table: table,
            submitter: ctx.payer.pubkey(),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: audit_ledger::instruction::AnchorAudit {
            bundle_hash: proof.bundle_hash,
            fairness_score: proof.fairness_score,
            timestamp: proof.timestamp,
        }
        .data(),
    }
}

/// Proof count as returned by the `proof_count` instruction
async fn proof_count(ctx: &mut ProgramTestContext, table: Pubkey) -> u64 {
    let ix = Instruction {
        program_id: audit_ledger::ID,
        accounts: audit_ledger::accounts::ProofCount { audit_table: table }.to_account_metas(None),
        data: audit_ledger::instruction::ProofCount {}.data(),
    };
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&ctx.payer.pubkey()),
        &[&ctx.payer],
        ctx.last_blockhash,
    );
    let sim = ctx.banks_client.simulate_transaction(tx).await.expect("simulate");
    assert!(sim.result.expect("simulation result").is_ok());

    let data = sim
        .simulation_details
        .and_then(|d| d.return_data)
        .map(|r| r.data)
        .unwrap_or_default();
    // Trailing zero bytes may be trimmed from return data
    let mut le = [0u8; 8];
    le[..data.len()].copy_from_slice(&data);
    u64::from_le_bytes(le)
}

async fn table_data(ctx: &mut ProgramTestContext, table: Pubkey) -> Vec<u8> {
    ctx.banks_client
        .get_account(table)
        .await
        .expect("get_account")
        .expect("table exists")
        .data
}

fn proof(i: u64) -> AuditProof {
    let mut bundle_hash = [0u8; 32];
    bundle_hash[..8].copy_from_slice(&i.to_le_bytes());
    AuditProof {
        bundle_hash,
        fairness_score: 880_000 + i,
        timestamp: 1_763_556_503 + i,
    }
}

#[tokio::test]
async fn new_table_reports_zero_proofs() {
    let mut ctx = start().await;
    let table = init_table(&mut ctx).await;

    assert_eq!(proof_count(&mut ctx, table).await, 0);

    let data = table_data(&mut ctx, table).await;
    let header = AuditTable::try_deserialize(&mut data.as_slice()).unwrap();
    assert_eq!(header.creator, ctx.payer.pubkey());
    assert_eq!(data.len(), AuditTable::space_for(0));
}

#[tokio::test]
async fn thousand_appends_are_counted_in_commit_order() {
    const N: u64 = 1_000;
    let mut ctx = start().await;
    let table = init_table(&mut ctx).await;

    for i in 0..N {
        let ix = anchor_ix(&ctx, table, proof(i));
        send(&mut ctx, ix, &[]).await.expect("anchor_audit");
    }

    assert_eq!(proof_count(&mut ctx, table).await, N);

    let data = table_data(&mut ctx, table).await;
    assert_eq!(data.len(), AuditTable::space_for(N as usize));
    for i in 0..N {
        assert_eq!(AuditTable::read_proof(&data, i), Some(proof(i)));
    }
}

#[tokio::test]
async fn init_twice_gives_independent_tables() {
    let mut ctx = start().await;
    let a = init_table(&mut ctx).await;
    let b = init_table(&mut ctx).await;
    assert_ne!(a, b);

    let ix = anchor_ix(&ctx, a, proof(1));
    send(&mut ctx, ix, &[]).await.unwrap();
    let ix = anchor_ix(&ctx, b, proof(2));
    send(&mut ctx, ix, &[]).await.unwrap();
    let ix = anchor_ix(&ctx, a, proof(3));
    send(&mut ctx, ix, &[]).await.unwrap();

    assert_eq!(proof_count(&mut ctx, a).await, 2);
    assert_eq!(proof_count(&mut ctx, b).await, 1);

    let data_a = table_data(&mut ctx, a).await;
    let data_b = table_data(&mut ctx, b).await;
    assert_eq!(AuditTable::read_proof(&data_a, 0), Some(proof(1)));
    assert_eq!(AuditTable::read_proof(&data_a, 1), Some(proof(3)));
    assert_eq!(AuditTable::read_proof(&data_b, 0), Some(proof(2)));
    assert_eq!(AuditTable::read_proof(&data_b, 1), None);
}

#[tokio::test]
async fn anchoring_against_missing_table_fails() {
    let mut ctx = start().await;
    let ix = anchor_ix(&ctx, Pubkey::new_unique(), proof(0));

    assert!(send(&mut ctx, ix, &[]).await.is_err());
}
