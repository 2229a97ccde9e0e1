//! Python syntax checking.
//!
//! Sources are parsed with the RustPython parser, which follows CPython's
//! grammar, then walked once for the context rules CPython enforces while
//! compiling (`return` outside a function, `break` outside a loop, invalid
//! `del` targets, ...). Nothing is executed.

use rustpython_ast::Visitor;
use rustpython_parser::{
    Parse, ParseError, ParseErrorType,
    ast::{self, Ranged},
    text_size::TextSize,
};

/// First syntax error found in a Python source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based line within the checked source.
    pub line: usize,
    /// 1-based character column.
    pub col: usize,
    pub message: String,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Returns `None` when `source` would compile, otherwise the first error in
/// document order.
pub fn check(source: &str) -> Option<SyntaxError> {
    match ast::Suite::parse(source, "<block>") {
        Ok(suite) => {
            let mut context = ContextCheck::new(source);
            for stmt in suite {
                context.visit_stmt(stmt);
            }
            context
                .first_error()
                .map(|(offset, message)| locate(source, offset, message))
        }
        Err(err) => Some(from_parse_error(source, err)),
    }
}

fn from_parse_error(source: &str, err: ParseError) -> SyntaxError {
    let message = match &err.error {
        ParseErrorType::Eof => "unexpected EOF while parsing".to_string(),
        other => other.to_string(),
    };
    locate(source, err.offset, message)
}

/// Convert a byte offset into a 1-based line and character column.
fn locate(source: &str, offset: TextSize, message: String) -> SyntaxError {
    let mut offset = offset.to_usize().min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &source[..offset];
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);

    SyntaxError {
        line: before.matches('\n').count() + 1,
        col: before[line_start..].chars().count() + 1,
        message,
    }
}

// ============================================================
// Context rules
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Module,
    Function,
    Class,
}

struct Scope {
    kind: ScopeKind,
    loop_depth: usize,
}

/// Walks a parsed suite and records statements that parse but do not compile.
struct ContextCheck<'a> {
    source: &'a str,
    scopes: Vec<Scope>,
    errors: Vec<(TextSize, String)>,
}

impl<'a> ContextCheck<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            scopes: vec![Scope {
                kind: ScopeKind::Module,
                loop_depth: 0,
            }],
            errors: Vec::new(),
        }
    }

    fn first_error(self) -> Option<(TextSize, String)> {
        self.errors.into_iter().min_by_key(|(offset, _)| *offset)
    }

    fn error(&mut self, offset: TextSize, message: impl Into<String>) {
        self.errors.push((offset, message.into()));
    }

    fn scope(&self) -> ScopeKind {
        self.scopes.last().map_or(ScopeKind::Module, |s| s.kind)
    }

    fn in_loop(&self) -> bool {
        self.scopes.last().is_some_and(|s| s.loop_depth > 0)
    }

    fn adjust_loop_depth(&mut self, delta: isize) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.loop_depth = scope.loop_depth.saturating_add_signed(delta);
        }
    }

    fn with_scope(&mut self, kind: ScopeKind, body: Vec<ast::Stmt>) {
        self.scopes.push(Scope {
            kind,
            loop_depth: 0,
        });
        for stmt in body {
            self.visit_stmt(stmt);
        }
        self.scopes.pop();
    }

    fn loop_body(&mut self, body: Vec<ast::Stmt>, orelse: Vec<ast::Stmt>) {
        self.adjust_loop_depth(1);
        for stmt in body {
            self.visit_stmt(stmt);
        }
        self.adjust_loop_depth(-1);
        // `orelse` is outside the loop
        for stmt in orelse {
            self.visit_stmt(stmt);
        }
    }

    fn check_del_target(&mut self, target: &ast::Expr) {
        match target {
            ast::Expr::Name(_) | ast::Expr::Attribute(_) | ast::Expr::Subscript(_) => {}
            ast::Expr::Tuple(tuple) => tuple.elts.iter().for_each(|e| self.check_del_target(e)),
            ast::Expr::List(list) => list.elts.iter().for_each(|e| self.check_del_target(e)),
            ast::Expr::Call(_) => self.error(target.start(), "cannot delete function call"),
            ast::Expr::Constant(_) => self.error(target.start(), "cannot delete literal"),
            _ => self.error(target.start(), "cannot delete expression"),
        }
    }

    /// A generator argument needs its own parentheses unless it is the only argument.
    fn check_call_arguments(&mut self, call: &ast::ExprCall) {
        if call.args.len() + call.keywords.len() < 2 {
            return;
        }
        for arg in &call.args {
            if let ast::Expr::GeneratorExp(generator) = arg {
                let start = generator.range.start();
                let parenthesized = self
                    .source
                    .get(start.to_usize()..)
                    .is_some_and(|rest| rest.starts_with('('));
                if !parenthesized {
                    self.error(start, "Generator expression must be parenthesized");
                }
            }
        }
    }

    fn require_function(&mut self, offset: TextSize, keyword: &str) {
        if self.scope() != ScopeKind::Function {
            self.error(offset, format!("'{}' outside function", keyword));
        }
    }
}

impl Visitor for ContextCheck<'_> {
    fn visit_stmt_function_def(&mut self, node: ast::StmtFunctionDef) {
        for decorator in node.decorator_list {
            self.visit_expr(decorator);
        }
        self.with_scope(ScopeKind::Function, node.body);
    }

    fn visit_stmt_async_function_def(&mut self, node: ast::StmtAsyncFunctionDef) {
        for decorator in node.decorator_list {
            self.visit_expr(decorator);
        }
        self.with_scope(ScopeKind::Function, node.body);
    }

    fn visit_stmt_class_def(&mut self, node: ast::StmtClassDef) {
        for decorator in node.decorator_list {
            self.visit_expr(decorator);
        }
        for base in node.bases {
            self.visit_expr(base);
        }
        for keyword in node.keywords {
            self.visit_keyword(keyword);
        }
        self.with_scope(ScopeKind::Class, node.body);
    }

    fn visit_expr_lambda(&mut self, node: ast::ExprLambda) {
        self.scopes.push(Scope {
            kind: ScopeKind::Function,
            loop_depth: 0,
        });
        self.visit_expr(*node.body);
        self.scopes.pop();
    }

    fn visit_stmt_for(&mut self, node: ast::StmtFor) {
        self.visit_expr(*node.target);
        self.visit_expr(*node.iter);
        self.loop_body(node.body, node.orelse);
    }

    fn visit_stmt_async_for(&mut self, node: ast::StmtAsyncFor) {
        self.visit_expr(*node.target);
        self.visit_expr(*node.iter);
        self.loop_body(node.body, node.orelse);
    }

    fn visit_stmt_while(&mut self, node: ast::StmtWhile) {
        self.visit_expr(*node.test);
        self.loop_body(node.body, node.orelse);
    }

    fn visit_stmt_return(&mut self, node: ast::StmtReturn) {
        self.require_function(node.range.start(), "return");
        self.generic_visit_stmt_return(node);
    }

    fn visit_stmt_break(&mut self, node: ast::StmtBreak) {
        if !self.in_loop() {
            self.error(node.range.start(), "'break' outside loop");
        }
    }

    fn visit_stmt_continue(&mut self, node: ast::StmtContinue) {
        if !self.in_loop() {
            self.error(node.range.start(), "'continue' not properly in loop");
        }
    }

    fn visit_stmt_nonlocal(&mut self, node: ast::StmtNonlocal) {
        if self.scope() == ScopeKind::Module {
            self.error(
                node.range.start(),
                "nonlocal declaration not allowed at module level",
            );
        }
    }

    fn visit_stmt_delete(&mut self, node: ast::StmtDelete) {
        for target in &node.targets {
            self.check_del_target(target);
        }
        self.generic_visit_stmt_delete(node);
    }

    fn visit_expr_yield(&mut self, node: ast::ExprYield) {
        self.require_function(node.range.start(), "yield");
        self.generic_visit_expr_yield(node);
    }

    fn visit_expr_yield_from(&mut self, node: ast::ExprYieldFrom) {
        self.require_function(node.range.start(), "yield");
        self.generic_visit_expr_yield_from(node);
    }

    fn visit_expr_await(&mut self, node: ast::ExprAwait) {
        self.require_function(node.range.start(), "await");
        self.generic_visit_expr_await(node);
    }

    fn visit_expr_call(&mut self, node: ast::ExprCall) {
        self.check_call_arguments(&node);
        self.generic_visit_expr_call(node);
    }

    fn visit_keyword(&mut self, node: ast::Keyword) {
        self.visit_expr(node.value);
    }

    fn visit_match_case(&mut self, node: ast::MatchCase) {
        if let Some(guard) = node.guard {
            self.visit_expr(*guard);
        }
        for stmt in node.body {
            self.visit_stmt(stmt);
        }
    }
}
